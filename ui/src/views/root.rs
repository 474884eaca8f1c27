use std::rc::Rc;

use dioxus::prelude::*;

use super::AnalysisScreen;
use crate::classifier::Classifier;
use crate::core::config::AppConfig;

/// Shared handle to the classifier the analysis screen submits to.
#[derive(Clone)]
pub struct ClassifierHandle(pub Rc<dyn Classifier>);

/// Application root shared by every platform crate.
///
/// Provides the configuration and the configured classifier as context, then
/// renders the analysis screen.
#[component]
pub fn LucidRoot(config: AppConfig) -> Element {
    crate::i18n::init();

    use_context_provider(|| ClassifierHandle(config.classifier()));
    use_context_provider(|| config.clone());

    rsx! {
        AnalysisScreen {}
    }
}
