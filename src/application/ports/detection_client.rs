use async_trait::async_trait;

use crate::domain::{DetectionResult, EncodedPayload, Language};

/// A classification provider reached over the network.
///
/// `classify` always resolves: transport, status and schema problems are folded
/// into `DetectionResult::Failure` before they reach the caller.
#[async_trait]
pub trait DetectionClient: Send + Sync {
    async fn classify(&self, payload: &EncodedPayload, language: Language) -> DetectionResult;
}

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("empty audio payload")]
    EmptyPayload,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
