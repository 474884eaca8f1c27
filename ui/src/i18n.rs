//! String catalog for `lucid-ui`.
//!
//! All user-visible copy goes through the `t!` macro, which resolves keys
//! against `i18n/en-US/lucid-ui.ftl` (embedded with `rust-embed`). Keys are
//! checked at compile time by `i18n-embed-fl`, and `src/tests/` verifies that
//! every key used in source exists in the catalog.
//!
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let label = t!("nav-app");
//! let notice = t!("notice-too-long", max = 500);
//! ```
use std::sync::Once;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Lookup macro routed through the shared [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the catalog file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "lucid-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the catalog (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("failed selecting languages ({err}); continuing with fallback");
        }
        // Must follow `select`, which rebuilds the bundles. Bidi isolation
        // marks would otherwise wrap every interpolated number.
        LOADER.set_use_isolating(false);
    });
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
