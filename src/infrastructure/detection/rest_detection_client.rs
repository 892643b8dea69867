use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{DetectionClient, DetectionError};
use crate::application::services::normalize_response;
use crate::domain::{AudioFormat, DetectionResult, EncodedPayload, Language};
use crate::infrastructure::observability::sanitize_for_log;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Voice-detection backend reached with a static API key.
pub struct RestDetectionClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceDetectionRequest<'a> {
    language: &'a str,
    audio_format: &'a str,
    audio_base64: &'a str,
}

impl RestDetectionClient {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn submit(
        &self,
        payload: &EncodedPayload,
        language: Language,
    ) -> Result<Value, DetectionError> {
        if payload.is_empty() {
            return Err(DetectionError::EmptyPayload);
        }

        let request_body = VoiceDetectionRequest {
            language: language.as_str(),
            audio_format: AudioFormat::Mp3.as_str(),
            audio_base64: payload.as_str(),
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            language = %language,
            encoded_len = payload.len(),
            "Sending audio to voice detection backend"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DetectionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DetectionError::HttpStatus {
                status: status.as_u16(),
                body: sanitize_for_log(&body),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| DetectionError::InvalidResponse(format!("parse response: {}", e)))
    }
}

#[async_trait]
impl DetectionClient for RestDetectionClient {
    async fn classify(&self, payload: &EncodedPayload, language: Language) -> DetectionResult {
        let result = normalize_response(self.submit(payload, language).await);

        tracing::info!(
            success = result.is_success(),
            "Voice detection backend call finished"
        );

        result
    }
}
