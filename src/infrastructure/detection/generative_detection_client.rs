use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::application::ports::{DetectionClient, DetectionError};
use crate::application::services::normalize_response;
use crate::domain::{AudioFormat, DetectionResult, EncodedPayload, Language};
use crate::infrastructure::observability::sanitize_for_log;

pub const DEFAULT_GENERATIVE_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GENERATIVE_MODEL: &str = "gemini-1.5-flash";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Hosted generative model asked for a schema-constrained verdict.
pub struct GenerativeDetectionClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerativeDetectionClient {
    pub fn new(base_url: Option<String>, model: Option<String>, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_GENERATIVE_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or_else(|| DEFAULT_GENERATIVE_MODEL.to_string()),
            api_key,
        }
    }

    fn request_body(payload: &EncodedPayload, language: Language) -> Value {
        json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        { "text": forensic_instruction(language) },
                        {
                            "inlineData": {
                                "mimeType": AudioFormat::Mp3.as_mime(),
                                "data": payload.as_str()
                            }
                        }
                    ]
                }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        })
    }

    async fn submit(
        &self,
        payload: &EncodedPayload,
        language: Language,
    ) -> Result<Value, DetectionError> {
        if payload.is_empty() {
            return Err(DetectionError::EmptyPayload);
        }

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        tracing::debug!(
            model = %self.model,
            language = %language,
            encoded_len = payload.len(),
            "Sending audio to generative model"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::request_body(payload, language))
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

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| DetectionError::InvalidResponse(format!("parse response: {}", e)))?;

        let text = completion
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| DetectionError::InvalidResponse("no candidate text".to_string()))?;

        serde_json::from_str(strip_code_fences(&text)).map_err(|e| {
            tracing::error!(raw_response = %sanitize_for_log(&text), "Failed to parse model JSON");
            DetectionError::InvalidResponse(format!("model output is not JSON: {}", e))
        })
    }
}

#[async_trait]
impl DetectionClient for GenerativeDetectionClient {
    async fn classify(&self, payload: &EncodedPayload, language: Language) -> DetectionResult {
        let result = normalize_response(self.submit(payload, language).await);

        tracing::info!(
            model = %self.model,
            success = result.is_success(),
            "Generative model call finished"
        );

        result
    }
}

fn forensic_instruction(language: Language) -> String {
    format!(
        "You are a forensic acoustic analyst. Decide whether the attached {language} speech \
recording is organic human speech or synthetically generated.\n\
Classify as HUMAN when the recording shows natural breathing, micro-pauses, pitch drift \
and room noise. Classify as AI_GENERATED when pitch is hyper-consistent, the noise floor \
is flattened or organic artifacts are missing.\n\
Respond with status \"success\", language \"{language}\", the classification, a \
confidenceScore between 0.0 and 1.0, and a brief technical explanation."
    )
}

fn response_schema() -> Value {
    let languages: Vec<&str> = Language::ALL.iter().map(Language::as_str).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "status": { "type": "STRING", "enum": ["success"] },
            "language": { "type": "STRING", "enum": languages },
            "classification": { "type": "STRING", "enum": ["AI_GENERATED", "HUMAN"] },
            "confidenceScore": { "type": "NUMBER" },
            "explanation": { "type": "STRING" }
        },
        "required": ["status", "language", "classification", "confidenceScore", "explanation"]
    })
}

/// Models sometimes wrap JSON in a markdown code block even in JSON mode.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

