use futures::future::LocalBoxFuture;
use serde::Deserialize;

use super::{ClassifyError, Classifier};
use crate::core::classification::{Category, ClassificationResult};

/// Talks to the classification service over HTTP.
///
/// The service takes the text as the `input_text` query parameter of
/// `POST /process` and answers with
/// `{ "result": "DEMENTIA" | "NO_DEMENTIA", "prob_dementia": f, "prob_no_dementia": f }`.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/process", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Classifier for HttpClassifier {
    fn classify(
        &self,
        text: String,
    ) -> LocalBoxFuture<'static, Result<ClassificationResult, ClassifyError>> {
        let request = self
            .client
            .post(&self.endpoint)
            .query(&[("input_text", text)]);

        Box::pin(async move {
            let response = request
                .send()
                .await
                .map_err(|err| ClassifyError::Transport(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ClassifyError::Rejected {
                    status: status.as_u16(),
                });
            }

            let body = response
                .text()
                .await
                .map_err(|err| ClassifyError::Transport(err.to_string()))?;
            decode_response(&body)
        })
    }
}

#[derive(Debug, Deserialize)]
struct ProcessResponse {
    #[serde(default)]
    success: Option<bool>,
    result: String,
    prob_dementia: f64,
    prob_no_dementia: f64,
}

/// Parse a service response body. Known backend codes become display labels,
/// anything else is passed through untouched.
pub(crate) fn decode_response(body: &str) -> Result<ClassificationResult, ClassifyError> {
    let raw: ProcessResponse =
        serde_json::from_str(body).map_err(|err| ClassifyError::Malformed(err.to_string()))?;

    let result = match Category::from_code(&raw.result) {
        Some(category) => category.label().to_string(),
        None => raw.result,
    };

    Ok(ClassificationResult {
        success: raw.success.unwrap_or(true),
        result,
        prob_dementia: raw.prob_dementia,
        prob_no_dementia: raw.prob_no_dementia,
    })
}
