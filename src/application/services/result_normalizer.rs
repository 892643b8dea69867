use serde_json::{Map, Value};

use crate::application::ports::DetectionError;
use crate::domain::{Classification, ConfidenceScore, Detection, DetectionResult, Language};

pub const GENERIC_FAILURE_MESSAGE: &str =
    "The forensic engine could not complete the analysis. Please verify the backend is live and try again.";

/// Folds a raw provider outcome into exactly one `DetectionResult` variant.
///
/// A success body must carry every field with the right type; anything less is a
/// failure. Confidence values outside `[0, 1]` are clamped.
pub fn normalize_response(outcome: Result<Value, DetectionError>) -> DetectionResult {
    match outcome.and_then(|body| parse_body(&body)) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "Detection provider call failed");
            DetectionResult::failure(GENERIC_FAILURE_MESSAGE)
        }
    }
}

fn parse_body(body: &Value) -> Result<DetectionResult, DetectionError> {
    let object = body
        .as_object()
        .ok_or_else(|| DetectionError::InvalidResponse("body is not a JSON object".to_string()))?;

    match object.get("status").and_then(Value::as_str) {
        Some("success") => parse_success(object).map(DetectionResult::success),
        Some("error") => {
            let message = object
                .get("message")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(GENERIC_FAILURE_MESSAGE);
            tracing::info!(message = %message, "Detection provider reported an error");
            Ok(DetectionResult::failure(message))
        }
        Some(other) => Err(DetectionError::InvalidResponse(format!(
            "unknown status: {}",
            other
        ))),
        None => Err(DetectionError::InvalidResponse(
            "missing status discriminator".to_string(),
        )),
    }
}

fn parse_success(object: &Map<String, Value>) -> Result<Detection, DetectionError> {
    let language = required_str(object, "language")?
        .parse::<Language>()
        .map_err(DetectionError::InvalidResponse)?;

    let classification = required_str(object, "classification")?
        .parse::<Classification>()
        .map_err(DetectionError::InvalidResponse)?;

    let raw_score = object
        .get("confidenceScore")
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            DetectionError::InvalidResponse("confidenceScore missing or not numeric".to_string())
        })?;
    let confidence = ConfidenceScore::clamped(raw_score).ok_or_else(|| {
        DetectionError::InvalidResponse(format!("confidenceScore not finite: {}", raw_score))
    })?;
    if confidence.value() != raw_score {
        tracing::debug!(raw_score, clamped = confidence.value(), "Clamped confidence score");
    }

    let explanation = required_str(object, "explanation")?;

    Ok(Detection::new(language, classification, confidence, explanation))
}

fn required_str<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a str, DetectionError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| DetectionError::InvalidResponse(format!("{} missing or not a string", field)))
}
