use serde::Serialize;

use super::{Classification, ConfidenceScore, Language};

/// A fully validated provider verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    language: Language,
    classification: Classification,
    confidence_score: ConfidenceScore,
    explanation: String,
}

impl Detection {
    pub fn new(
        language: Language,
        classification: Classification,
        confidence_score: ConfidenceScore,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            language,
            classification,
            confidence_score,
            explanation: explanation.into(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn confidence_score(&self) -> ConfidenceScore {
        self.confidence_score
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

/// Outcome of one verification attempt, as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DetectionResult {
    Success(Detection),
    #[serde(rename = "error")]
    Failure { message: String },
}

impl DetectionResult {
    pub fn success(detection: Detection) -> Self {
        Self::Success(detection)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn detection(&self) -> Option<&Detection> {
        match self {
            Self::Success(detection) => Some(detection),
            Self::Failure { .. } => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message } => Some(message),
        }
    }
}
