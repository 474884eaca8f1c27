use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::{route::ActiveRoute, theme::StyleTable};
use crate::t;

// Navbar stylesheet (inlined as well in release native builds, where the
// asset server is not available)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

pub fn route_label(route: ActiveRoute) -> String {
    match route {
        ActiveRoute::App => t!("nav-app"),
        ActiveRoute::About => t!("nav-about"),
        ActiveRoute::Github => t!("nav-github"),
    }
}

/// Three fixed tabs with a sliding indicator under the active one.
///
/// The bar holds no state of its own: it renders `active` and reports taps
/// through `on_select`, including taps on the tab that is already active.
#[component]
pub fn NavigationBar(
    active: ActiveRoute,
    on_select: EventHandler<ActiveRoute>,
    styles: StyleTable,
) -> Element {
    let offset = active.indicator_offset_percent();
    let tabs: Vec<Tab> = ActiveRoute::ALL
        .into_iter()
        .map(|route| {
            let is_active = route == active;
            Tab {
                route,
                class: if is_active {
                    "navbar__tab navbar__tab--active"
                } else {
                    "navbar__tab"
                },
                style: if is_active {
                    styles.nav_tab_active.clone()
                } else {
                    styles.nav_tab.clone()
                },
                label: route_label(route),
            }
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav {
            id: "navbar",
            class: "navbar",
            style: "{styles.nav}",
            aria_label: t!("nav-label"),
            div { class: "navbar__tabs",
                for tab in tabs.into_iter() {
                    {render_tab(tab, on_select)}
                }
                div {
                    class: "navbar__indicator",
                    style: "{styles.nav_indicator} transform: translateX({offset}%);",
                }
            }
        }
    }
}

struct Tab {
    route: ActiveRoute,
    class: &'static str,
    style: String,
    label: String,
}

fn render_tab(tab: Tab, on_select: EventHandler<ActiveRoute>) -> Element {
    let Tab {
        route,
        class,
        style,
        label,
    } = tab;

    rsx! {
        button {
            r#type: "button",
            id: "navbar-tab-{route.slug()}",
            class,
            style,
            onclick: move |_| {
                debug!(route = route.slug(), "tab tapped");
                on_select.call(route);
            },
            "{label}"
        }
    }
}
