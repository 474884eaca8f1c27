use std::time::Duration;

use futures::future::LocalBoxFuture;

use super::{ClassifyError, Classifier};
use crate::core::{classification::ClassificationResult, timing};

/// Stand-in for the classification service: fixed delay, fixed payload.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedClassifier {
    delay: Duration,
}

impl SimulatedClassifier {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn payload() -> ClassificationResult {
        ClassificationResult {
            success: true,
            result: "No Dementia".to_string(),
            prob_dementia: 0.4,
            prob_no_dementia: 0.6,
        }
    }
}

impl Default for SimulatedClassifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl Classifier for SimulatedClassifier {
    fn classify(
        &self,
        _text: String,
    ) -> LocalBoxFuture<'static, Result<ClassificationResult, ClassifyError>> {
        let delay = self.delay;
        Box::pin(async move {
            timing::sleep(delay).await;
            Ok(Self::payload())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn settles_after_the_configured_delay() {
        let started = tokio::time::Instant::now();
        let result = SimulatedClassifier::default()
            .classify("patient shows mild memory lapses".into())
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(result.result, "No Dementia");
        assert_eq!(result.prob_dementia, 0.4);
        assert_eq!(result.prob_no_dementia, 0.6);
    }

    #[tokio::test(start_paused = true)]
    async fn payload_ignores_the_input() {
        let classifier = SimulatedClassifier::new(Duration::ZERO);
        let a = classifier.classify("one".into()).await.unwrap();
        let b = classifier.classify("two".into()).await.unwrap();
        assert_eq!(a, b);
    }
}
