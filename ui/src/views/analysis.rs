use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;

use super::{AboutPanel, ClassifierHandle, GithubPanel};
use crate::components::{show_notice, NavigationBar, NoticeBanner, ShownNotice};
use crate::core::{
    config::AppConfig,
    format,
    platform,
    route::ActiveRoute,
    screen::ScreenState,
    session,
    theme::StyleTable,
};
use crate::results::ResultPanel;
use crate::t;

/// The whole app screen: navigation bar, and below it the panel for the
/// active route.
///
/// Owns the input text, the notice slot and a [`ScreenState`] holding the
/// route and the submission state.
#[component]
pub fn AnalysisScreen() -> Element {
    let config = use_context::<AppConfig>();
    let classifier = use_context::<ClassifierHandle>();

    let theme = platform::use_system_theme();
    let layout = platform::use_viewport_layout();
    let styles = use_memo(move || StyleTable::resolve(theme(), layout()));

    let mut screen = use_signal(ScreenState::default);
    let mut input = use_signal(String::new);
    let mut notice = use_signal(|| Option::<ShownNotice>::None);

    let max_chars = config.max_input_chars;
    let notice_ms = config.notice_ms;

    let on_submit = move |_: MouseEvent| {
        let text = input.cloned();
        match session::submit(classifier.0.clone(), screen, &text, max_chars) {
            Ok(pending) => {
                debug!(chars = format::char_count(&text), "submission started");
                notice.set(None);
                spawn(async move {
                    match pending.await {
                        Ok(result) => info!(label = %result.result, "classification received"),
                        Err(_) => {
                            warn!("submission failed");
                            show_notice(notice, session::Notice::SubmissionFailed, notice_ms);
                        }
                    }
                });
            }
            Err(rejected) => {
                debug!(%rejected, "submission rejected");
                if let Some(n) = rejected.notice() {
                    show_notice(notice, n, notice_ms);
                }
            }
        }
    };

    let styles_now = styles();
    let snapshot = screen();
    let controls = snapshot.controls();
    let active = snapshot.route();

    let body = match active {
        ActiveRoute::App => {
            let text_value = input();
            let used = format::char_count(&text_value);
            let (button_class, button_style) = if controls.busy {
                ("analysis__button analysis__button--busy", styles_now.button_busy.clone())
            } else {
                ("analysis__button", styles_now.button.clone())
            };
            rsx! {
                div { class: "analysis__widget fade-in", style: "{styles_now.widget}",
                    textarea {
                        id: "analysis-input",
                        class: "analysis__input",
                        style: "{styles_now.input}",
                        placeholder: t!("input-placeholder"),
                        maxlength: "{max_chars}",
                        disabled: controls.input_disabled,
                        value: "{text_value}",
                        oninput: move |evt| input.set(format::clamp_chars(&evt.value(), max_chars)),
                    }
                    span { class: "analysis__counter", style: "{styles_now.table_label}",
                        {t!("input-counter", used = used, max = max_chars)}
                    }
                    button {
                        id: "analysis-submit",
                        r#type: "button",
                        class: button_class,
                        style: button_style,
                        disabled: controls.trigger_disabled,
                        aria_busy: controls.busy,
                        onclick: on_submit,
                        if controls.busy {
                            span { class: "spinner", aria_label: t!("analyze-busy") }
                        } else {
                            span { style: "{styles_now.button_text}", {t!("analyze-button")} }
                        }
                    }
                }

                if let Some(result) = snapshot.visible_result().cloned() {
                    ResultPanel { result, styles: styles_now.clone() }
                }
            }
        }
        ActiveRoute::About => rsx! {
            AboutPanel { styles: styles_now.clone() }
        },
        ActiveRoute::Github => rsx! {
            GithubPanel {
                styles: styles_now.clone(),
                repository_url: config.repository_url.clone(),
            }
        },
    };

    rsx! {
        div {
            class: "app app--{styles_now.theme.slug()}",
            style: "{styles_now.container}",
            main { class: "app__content page-{active.slug()}",
                if let Some(shown) = notice() {
                    NoticeBanner {
                        notice: shown,
                        style: styles_now.notice.clone(),
                        on_dismiss: move |_| notice.set(None),
                    }
                }
                {body}
            }
            NavigationBar {
                active,
                on_select: move |next: ActiveRoute| {
                    if screen.with_mut(|s| s.select_route(next)) {
                        debug!(route = next.slug(), "route selected");
                    }
                },
                styles: styles_now.clone(),
            }
        }
    }
}
