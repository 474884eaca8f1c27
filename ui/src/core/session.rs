//! Submission workflow for the analysis screen: `Idle -> Loading -> Result`.
//!
//! The state lives in a plain struct so the screen component only has to hold
//! it in a signal and forward events. There is no error state: a failed
//! submission reports a [`Notice`] and falls back to whatever was shown before.
//!
//! ```ignore
//! match session::submit(classifier, state, &text, max_chars) {
//!     Ok(pending) => { spawn(async move { pending.await; }); }
//!     Err(rejected) => show(rejected.notice()),
//! }
//! ```

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use thiserror::Error;

use crate::classifier::{ClassifyError, Classifier};

use super::classification::ClassificationResult;
use super::format;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input is empty")]
    Empty,
    #[error("input exceeds {max} characters")]
    TooLong { max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a submission is already in flight")]
    Busy,
}

/// User-facing notices. Submission failures carry no detail on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Validation(ValidationError),
    SubmissionFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Result,
}

/// Proof that `begin` accepted the input; carries the raw text to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisState {
    loading: bool,
    result: Option<ClassificationResult>,
}

impl AnalysisState {
    pub fn phase(&self) -> Phase {
        match (self.loading, &self.result) {
            (true, _) => Phase::Loading,
            (false, Some(_)) => Phase::Result,
            (false, None) => Phase::Idle,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Input field and submit trigger accept interaction only while idle.
    pub fn is_interactive(&self) -> bool {
        !self.loading
    }

    /// The held result. Stays visible while a re-submission is loading.
    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    /// Validate and enter `Loading`. Rejections leave the state untouched.
    pub fn begin(&mut self, text: &str, max_chars: usize) -> Result<Ticket, SubmitRejected> {
        if self.loading {
            return Err(SubmitRejected::Busy);
        }
        validate(text, max_chars)?;
        self.loading = true;
        Ok(Ticket {
            text: text.to_string(),
        })
    }

    /// Apply the settled outcome of the in-flight submission.
    pub fn settle(&mut self, outcome: Result<ClassificationResult, ClassifyError>) -> Option<Notice> {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                None
            }
            Err(_) => Some(Notice::SubmissionFailed),
        }
    }
}

pub fn validate(text: &str, max_chars: usize) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if format::char_count(text) > max_chars {
        return Err(ValidationError::TooLong { max: max_chars });
    }
    Ok(())
}

impl SubmitRejected {
    /// Busy is silent: the trigger is already disabled while loading.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitRejected::Invalid(err) => Some(Notice::Validation(err.clone())),
            SubmitRejected::Busy => None,
        }
    }
}

/// Somewhere an [`AnalysisState`] can be updated in place.
pub trait StateCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut AnalysisState) -> R) -> R;
}

impl StateCell for Rc<RefCell<AnalysisState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut AnalysisState) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

/// Start a submission.
///
/// Validation and the move to `Loading` happen before this returns; the
/// returned future asks the classifier and settles the state exactly once.
/// Nothing cancels it, so callers must keep the trigger disabled while
/// loading.
pub fn submit<C, S>(
    classifier: Rc<C>,
    mut cell: S,
    text: &str,
    max_chars: usize,
) -> Result<impl Future<Output = Result<ClassificationResult, ClassifyError>>, SubmitRejected>
where
    C: Classifier + ?Sized + 'static,
    S: StateCell + 'static,
{
    let ticket = cell.update(|state| state.begin(text, max_chars))?;
    Ok(async move {
        let outcome = classifier.classify(ticket.text).await;
        cell.update(|state| state.settle(outcome.clone()));
        outcome
    })
}
