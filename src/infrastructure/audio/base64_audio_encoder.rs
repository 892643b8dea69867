use async_trait::async_trait;

use crate::application::ports::{AudioEncoder, EncodeError};
use crate::domain::{AudioSample, AudioSource, EncodedPayload};

/// Reads the sample and produces standard base64 text.
pub struct Base64AudioEncoder;

#[async_trait]
impl AudioEncoder for Base64AudioEncoder {
    #[tracing::instrument(skip(self, sample), fields(file_name = %sample.file_name))]
    async fn encode(&self, sample: &AudioSample) -> Result<EncodedPayload, EncodeError> {
        let payload = match &sample.source {
            AudioSource::Memory(data) => {
                if data.is_empty() {
                    return Err(EncodeError::EmptySample(sample.file_name.clone()));
                }
                EncodedPayload::encode(data)
            }
            AudioSource::File(path) => {
                let data = tokio::fs::read(path).await.map_err(|e| EncodeError::Read {
                    file_name: sample.file_name.clone(),
                    reason: e.to_string(),
                })?;
                if data.is_empty() {
                    return Err(EncodeError::EmptySample(sample.file_name.clone()));
                }
                EncodedPayload::encode(&data)
            }
        };

        tracing::debug!(
            size_bytes = sample.size_bytes,
            encoded_len = payload.len(),
            "Encoded audio sample"
        );

        Ok(payload)
    }
}
