//! Classification service boundary.
//!
//! The analysis screen only ever talks to a [`Classifier`]. Which one it gets
//! is decided by [`crate::core::config::AppConfig::classifier`]:
//! - [`SimulatedClassifier`] waits a fixed delay and returns a canned payload.
//! - [`HttpClassifier`] posts the text to the classification service.

use futures::future::LocalBoxFuture;
use thiserror::Error;

use crate::core::classification::ClassificationResult;

mod http;
pub use http::HttpClassifier;

mod simulated;
pub use simulated::SimulatedClassifier;

/// One asynchronous call that settles exactly once.
pub trait Classifier {
    fn classify(&self, text: String)
        -> LocalBoxFuture<'static, Result<ClassificationResult, ClassifyError>>;
}

/// Every variant is shown to the user as the same generic notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("service rejected the request with HTTP {status}")]
    Rejected { status: u16 },
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[cfg(test)]
pub(crate) struct FailingClassifier;

#[cfg(test)]
impl Classifier for FailingClassifier {
    fn classify(
        &self,
        _text: String,
    ) -> LocalBoxFuture<'static, Result<ClassificationResult, ClassifyError>> {
        Box::pin(async { Err(ClassifyError::Transport("unreachable".into())) })
    }
}
