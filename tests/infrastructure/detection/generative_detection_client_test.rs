use serde_json::json;

use voxguard::application::ports::DetectionClient;
use voxguard::domain::{Classification, EncodedPayload, Language};
use voxguard::infrastructure::detection::GenerativeDetectionClient;

use crate::helpers::{MP3_HEADER, MockProvider, start_mock_provider};

const MODEL: &str = "gemini-test";
const ROUTE: &str = "/models/gemini-test:generateContent";

fn candidate_response(text: &str) -> String {
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": text } ] } }
        ]
    })
    .to_string()
}

async fn provider_returning(status: u16, body: String) -> (MockProvider, GenerativeDetectionClient) {
    let provider = start_mock_provider(ROUTE, status, body).await;
    let client = GenerativeDetectionClient::new(
        Some(provider.base_url.clone()),
        Some(MODEL.to_string()),
        "test-key".to_string(),
    );
    (provider, client)
}

#[tokio::test]
async fn given_schema_conformant_output_when_classifying_then_returns_detection() {
    let text = r#"{"status":"success","language":"Malayalam","classification":"AI_GENERATED","confidenceScore":0.93,"explanation":"Hyper-consistent pitch"}"#;
    let (_provider, client) = provider_returning(200, candidate_response(text)).await;

    let result = client
        .classify(&EncodedPayload::encode(MP3_HEADER), Language::Malayalam)
        .await;

    let detection = result.detection().unwrap();
    assert_eq!(detection.language(), Language::Malayalam);
    assert_eq!(detection.classification(), Classification::AiGenerated);
    assert_eq!(detection.confidence_score().value(), 0.93);
}

#[tokio::test]
async fn given_fenced_output_when_classifying_then_strips_fences() {
    let text = "```json\n{\"status\":\"success\",\"language\":\"English\",\"classification\":\"HUMAN\",\"confidenceScore\":1.01,\"explanation\":\"Room tone\"}\n```";
    let (_provider, client) = provider_returning(200, candidate_response(text)).await;

    let result = client
        .classify(&EncodedPayload::encode(MP3_HEADER), Language::English)
        .await;

    assert_eq!(result.detection().unwrap().confidence_score().value(), 1.0);
}

#[tokio::test]
async fn given_request_when_classifying_then_sends_audio_part_and_enforced_schema() {
    let text = r#"{"status":"success","language":"Hindi","classification":"HUMAN","confidenceScore":0.5,"explanation":"ok"}"#;
    let (provider, client) = provider_returning(200, candidate_response(text)).await;
    let payload = EncodedPayload::encode(MP3_HEADER);

    client.classify(&payload, Language::Hindi).await;

    let request = provider.last_request().await.unwrap();
    assert_eq!(request.path, ROUTE);
    assert_eq!(request.headers.get("x-goog-api-key").unwrap(), "test-key");

    let parts = &request.body["contents"][0]["parts"];
    assert!(parts[0]["text"].as_str().unwrap().contains("Hindi"));
    assert_eq!(parts[1]["inlineData"]["mimeType"], "audio/mp3");
    assert_eq!(parts[1]["inlineData"]["data"], payload.as_str());

    let config = &request.body["generationConfig"];
    assert_eq!(config["responseMimeType"], "application/json");
    assert_eq!(
        config["responseSchema"]["required"],
        json!(["status", "language", "classification", "confidenceScore", "explanation"])
    );
}

#[tokio::test]
async fn given_output_missing_field_when_classifying_then_returns_failure() {
    let text = r#"{"status":"success","language":"Tamil","classification":"HUMAN","explanation":"no score"}"#;
    let (_provider, client) = provider_returning(200, candidate_response(text)).await;

    let result = client
        .classify(&EncodedPayload::encode(MP3_HEADER), Language::Tamil)
        .await;

    assert!(!result.is_success());
}

#[tokio::test]
async fn given_no_candidates_when_classifying_then_returns_failure() {
    let (_provider, client) = provider_returning(200, r#"{"candidates":[]}"#.to_string()).await;

    let result = client
        .classify(&EncodedPayload::encode(MP3_HEADER), Language::Tamil)
        .await;

    assert!(!result.is_success());
}

#[tokio::test]
async fn given_model_rejects_audio_when_classifying_then_returns_failure() {
    let body = r#"{"error":{"code":400,"message":"Unsupported audio"}}"#.to_string();
    let (_provider, client) = provider_returning(400, body).await;

    let result = client
        .classify(&EncodedPayload::encode(MP3_HEADER), Language::Telugu)
        .await;

    assert!(!result.is_success());
}
