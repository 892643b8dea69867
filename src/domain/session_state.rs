use serde::Serialize;

use super::{AudioSample, DetectionResult, History, HistoryEntry, Language};

/// Work handed out by `start_verification`; owned by the caller until completion.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingVerification {
    pub sample: AudioSample,
    pub language: Language,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a verification is already in progress")]
    VerificationInFlight,
}

/// Per-session UI state. Mutated only from one logical writer at a time.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    sample: Option<AudioSample>,
    language: Language,
    in_flight: bool,
    last_result: Option<DetectionResult>,
    history: History,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current recording and clears the previous verdict.
    pub fn select_file(&mut self, sample: AudioSample) -> Result<(), SessionError> {
        if self.in_flight {
            return Err(SessionError::VerificationInFlight);
        }
        self.sample = Some(sample);
        self.last_result = None;
        Ok(())
    }

    pub fn select_language(&mut self, language: Language) -> Result<(), SessionError> {
        if self.in_flight {
            return Err(SessionError::VerificationInFlight);
        }
        self.language = language;
        Ok(())
    }

    /// Returns `None` without touching state when there is nothing to verify or a
    /// verification is already running.
    pub fn start_verification(&mut self) -> Option<PendingVerification> {
        if self.in_flight {
            return None;
        }
        let sample = self.sample.clone()?;

        self.in_flight = true;
        self.last_result = None;
        Some(PendingVerification {
            sample,
            language: self.language,
        })
    }

    pub fn complete_verification(&mut self, pending: &PendingVerification, result: DetectionResult) {
        self.in_flight = false;
        if let Some(detection) = result.detection() {
            self.history.push(HistoryEntry::new(
                pending.sample.file_name.clone(),
                detection.clone(),
            ));
        }
        self.last_result = Some(result);
    }

    /// Clears the recording and verdict; history survives.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.in_flight {
            return Err(SessionError::VerificationInFlight);
        }
        self.sample = None;
        self.last_result = None;
        Ok(())
    }

    pub fn sample(&self) -> Option<&AudioSample> {
        self.sample.as_ref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last_result(&self) -> Option<&DetectionResult> {
        self.last_result.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            file: self.sample.as_ref().map(|s| FileSummary {
                name: s.file_name.clone(),
                size_bytes: s.size_bytes,
                size_kb: (s.size_kb() * 10.0).round() / 10.0,
            }),
            language: self.language,
            in_flight: self.in_flight,
            result: self.last_result.clone(),
            history: self.history.entries().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub name: String,
    pub size_bytes: u64,
    pub size_kb: f64,
}

/// Read-only view rendered by the front-end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub file: Option<FileSummary>,
    pub language: Language,
    pub in_flight: bool,
    pub result: Option<DetectionResult>,
    pub history: Vec<HistoryEntry>,
}
