use async_trait::async_trait;

use crate::domain::{AudioSample, EncodedPayload};

#[async_trait]
pub trait AudioEncoder: Send + Sync {
    async fn encode(&self, sample: &AudioSample) -> Result<EncodedPayload, EncodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("failed to read {file_name}: {reason}")]
    Read { file_name: String, reason: String },
    #[error("audio sample is empty: {0}")]
    EmptySample(String),
}
