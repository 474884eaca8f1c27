use dioxus::prelude::*;

use crate::core::theme::StyleTable;
use crate::t;

#[component]
pub fn AboutPanel(styles: StyleTable) -> Element {
    rsx! {
        section { class: "panel panel-about fade-in", style: "{styles.panel}",
            h1 { class: "panel__title", style: "{styles.panel_title}", {t!("about-title")} }
            p { class: "panel__body", style: "{styles.panel_body}", {t!("about-body-1")} }
            p { class: "panel__body", style: "{styles.panel_body}", {t!("about-body-2")} }
            p { class: "panel__body", style: "{styles.panel_body}", {t!("about-body-3")} }
        }
    }
}
