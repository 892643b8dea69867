use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{DetectionClient, DetectionError};
use crate::application::services::normalize_response;
use crate::domain::{DetectionResult, EncodedPayload, Language};

pub const SIMULATED_CONFIDENCE: f64 = 0.95;

/// Offline provider returning a fixed simulated verdict, for local runs without a backend.
pub struct ScaffoldDetectionClient {
    response_delay: Duration,
}

impl ScaffoldDetectionClient {
    pub fn new(response_delay: Duration) -> Self {
        Self { response_delay }
    }
}

#[async_trait]
impl DetectionClient for ScaffoldDetectionClient {
    async fn classify(&self, payload: &EncodedPayload, language: Language) -> DetectionResult {
        if payload.is_empty() {
            return normalize_response(Err(DetectionError::EmptyPayload));
        }

        if !self.response_delay.is_zero() {
            tokio::time::sleep(self.response_delay).await;
        }

        tracing::info!(language = %language, "Returning simulated detection result");

        normalize_response(Ok(json!({
            "status": "success",
            "language": language.as_str(),
            "classification": "AI_GENERATED",
            "confidenceScore": SIMULATED_CONFIDENCE,
            "explanation": "[SIMULATION] No provider is configured. The result is a fixed \
placeholder used to exercise the verification flow."
        })))
    }
}
