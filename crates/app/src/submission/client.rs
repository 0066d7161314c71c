use shared_types::{AppError, FormInput, PredictionResponse};

use super::PredictionClient;

/// Path of the prediction endpoint, relative to the API base.
pub const PREDICT_PATH: &str = "/predict";

/// A response the service actually produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictReply {
    /// 2xx with a prediction body.
    Accepted(PredictionResponse),
    /// Non-2xx with an `error` body.
    Rejected { status: u16, error: String },
}

/// No usable response was obtained.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed response (status {status}): {source}")]
    Malformed {
        status: u16,
        source: serde_json::Error,
    },
}

/// `POST /predict` over HTTP with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}{PREDICT_PATH}", base_url.trim_end_matches('/')),
        }
    }

    #[cfg(test)]
    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Classify a settled response by status and decode its body.
pub fn decode_reply(status: u16, body: &[u8]) -> Result<PredictReply, ClientError> {
    if (200..300).contains(&status) {
        serde_json::from_slice::<PredictionResponse>(body)
            .map(PredictReply::Accepted)
            .map_err(|source| ClientError::Malformed { status, source })
    } else {
        serde_json::from_slice::<AppError>(body)
            .map(|err| PredictReply::Rejected {
                status,
                error: err.message,
            })
            .map_err(|source| ClientError::Malformed { status, source })
    }
}

impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, input: &FormInput) -> Result<PredictReply, ClientError> {
        let response = self.http.post(&self.endpoint).json(input).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_reply(status, &body)
    }
}
