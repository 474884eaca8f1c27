use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::core::session::{Notice, ValidationError};
use crate::core::timing;
use crate::t;

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(1);

/// A notice currently on screen. The id lets an expiring timer tell whether
/// its notice was already replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ShownNotice {
    pub id: u64,
    pub notice: Notice,
}

pub fn notice_message(notice: &Notice) -> String {
    match notice {
        Notice::Validation(ValidationError::Empty) => t!("notice-empty"),
        Notice::Validation(ValidationError::TooLong { max }) => {
            let max: usize = *max;
            t!("notice-too-long", max = max)
        }
        Notice::SubmissionFailed => t!("notice-failed"),
    }
}

/// Show `notice` in `slot` and clear it after `ttl_ms` unless a newer notice
/// took its place. A zero ttl keeps it until replaced.
pub fn show_notice(mut slot: Signal<Option<ShownNotice>>, notice: Notice, ttl_ms: u64) {
    let id = NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed);
    slot.set(Some(ShownNotice { id, notice }));

    if ttl_ms == 0 {
        return;
    }
    spawn(async move {
        timing::sleep_ms(ttl_ms).await;
        let expired = matches!(&*slot.peek(), Some(shown) if shown.id == id);
        if expired {
            slot.set(None);
        }
    });
}

#[component]
pub fn NoticeBanner(notice: ShownNotice, style: String, on_dismiss: EventHandler<()>) -> Element {
    let message = notice_message(&notice.notice);

    rsx! {
        div {
            class: "notice fade-in",
            role: "alert",
            style: "{style}",
            strong { class: "notice__title", {t!("notice-title")} }
            span { class: "notice__message", "{message}" }
            button {
                r#type: "button",
                class: "notice__dismiss",
                aria_label: t!("notice-dismiss"),
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_come_from_the_catalog() {
        crate::i18n::init();
        assert_eq!(
            notice_message(&Notice::Validation(ValidationError::Empty)),
            "Please enter some text"
        );
        assert_eq!(
            notice_message(&Notice::Validation(ValidationError::TooLong { max: 500 })),
            "Text is longer than 500 characters"
        );
        assert_eq!(notice_message(&Notice::SubmissionFailed), "Something went wrong");
    }
}
