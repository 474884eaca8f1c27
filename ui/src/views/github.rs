use dioxus::prelude::*;

use crate::core::theme::StyleTable;
use crate::t;

/// Points at the project repository. The link opens in the platform browser;
/// desktop and mobile webviews hand `_blank` targets to the system.
#[component]
pub fn GithubPanel(styles: StyleTable, repository_url: String) -> Element {
    rsx! {
        section { class: "panel panel-github fade-in", style: "{styles.panel}",
            h1 { class: "panel__title", style: "{styles.panel_title}", {t!("github-title")} }
            p { class: "panel__body", style: "{styles.panel_body}", {t!("github-body")} }
            a {
                class: "panel__link",
                href: "{repository_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                style: "{styles.button}",
                {t!("github-open")}
            }
            p { class: "panel__url", style: "{styles.panel_body}", "{repository_url}" }
        }
    }
}
