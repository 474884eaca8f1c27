//! Host platform signals: colour scheme and viewport size.
//!
//! Every renderer we ship on (web, desktop webview, mobile webview) runs
//! JavaScript, so both signals are read with `document::eval` and pushed back
//! over the eval channel whenever the platform reports a change. If the
//! channel closes the last value is kept.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::theme::{Layout, Theme};

const COLOR_SCHEME_JS: &str = r#"
    const query = window.matchMedia("(prefers-color-scheme: dark)");
    dioxus.send(query.matches);
    query.addEventListener("change", (event) => dioxus.send(event.matches));
    await new Promise(() => {});
"#;

const VIEWPORT_JS: &str = r#"
    const report = () => dioxus.send(window.innerHeight);
    report();
    window.addEventListener("resize", report);
    await new Promise(() => {});
"#;

/// Current system colour scheme, updated live.
pub fn use_system_theme() -> Signal<Theme> {
    let mut theme = use_signal(Theme::default);

    use_future(move || async move {
        let mut eval = document::eval(COLOR_SCHEME_JS);
        while let Ok(prefers_dark) = eval.recv::<bool>().await {
            let next = Theme::from_prefers_dark(prefers_dark);
            if *theme.peek() != next {
                debug!(theme = next.slug(), "colour scheme changed");
                theme.set(next);
            }
        }
    });

    theme
}

/// Compact or regular layout, following the viewport height.
pub fn use_viewport_layout() -> Signal<Layout> {
    let mut layout = use_signal(Layout::default);

    use_future(move || async move {
        let mut eval = document::eval(VIEWPORT_JS);
        while let Ok(height) = eval.recv::<f64>().await {
            let next = Layout::from_viewport_height(height);
            if *layout.peek() != next {
                debug!(height, ?next, "viewport layout changed");
                layout.set(next);
            }
        }
    });

    layout
}
