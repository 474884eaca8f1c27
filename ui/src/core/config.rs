//! Build-time application configuration.
//!
//! Values come from environment variables captured at compile time, so a
//! mobile bundle carries its backend URL with it:
//!
//! | variable                    | effect                                   |
//! |-----------------------------|------------------------------------------|
//! | `LUCID_API_URL`             | use the HTTP classifier against this URL |
//! | `LUCID_MAX_INPUT_CHARS`     | input bound (default 500, long form 50000) |
//! | `LUCID_SIMULATED_DELAY_MS`  | stub delay (default 1500)                |
//! | `LUCID_NOTICE_MS`           | notice lifetime (default 3000)           |
//!
//! Unparseable numbers fall back to the defaults.

use std::rc::Rc;
use std::time::Duration;

use serde::Deserialize;

use crate::classifier::{Classifier, HttpClassifier, SimulatedClassifier};

pub const DEFAULT_MAX_INPUT_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Backend {
    Simulated,
    Http { base_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: Backend,
    pub max_input_chars: usize,
    pub simulated_delay_ms: u64,
    pub notice_ms: u64,
    pub repository_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Simulated,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            simulated_delay_ms: SimulatedClassifier::DEFAULT_DELAY.as_millis() as u64,
            notice_ms: 3_000,
            repository_url: env!("CARGO_PKG_REPOSITORY").to_string(),
        }
    }
}

impl AppConfig {
    /// Configuration baked in by the build environment.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "LUCID_API_URL" => option_env!("LUCID_API_URL"),
                "LUCID_MAX_INPUT_CHARS" => option_env!("LUCID_MAX_INPUT_CHARS"),
                "LUCID_SIMULATED_DELAY_MS" => option_env!("LUCID_SIMULATED_DELAY_MS"),
                "LUCID_NOTICE_MS" => option_env!("LUCID_NOTICE_MS"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let backend = lookup("LUCID_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .map(|base_url| Backend::Http { base_url })
            .unwrap_or(Backend::Simulated);

        let max_input_chars = parse_or(
            lookup("LUCID_MAX_INPUT_CHARS"),
            defaults.max_input_chars,
        )
        .max(1);

        Self {
            backend,
            max_input_chars,
            simulated_delay_ms: parse_or(
                lookup("LUCID_SIMULATED_DELAY_MS"),
                defaults.simulated_delay_ms,
            ),
            notice_ms: parse_or(lookup("LUCID_NOTICE_MS"), defaults.notice_ms),
            repository_url: defaults.repository_url,
        }
    }

    /// Build the classifier this configuration asks for.
    pub fn classifier(&self) -> Rc<dyn Classifier> {
        match &self.backend {
            Backend::Simulated => Rc::new(SimulatedClassifier::new(Duration::from_millis(
                self.simulated_delay_ms,
            ))),
            Backend::Http { base_url } => Rc::new(HttpClassifier::new(base_url)),
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, fallback: T) -> T {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(fallback)
}
