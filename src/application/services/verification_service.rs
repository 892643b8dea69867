use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::Mutex;

use crate::application::ports::{AudioEncoder, DetectionClient};
use crate::domain::{
    AudioSample, AudioSampleError, DetectionResult, Language, PendingVerification, SessionError,
    SessionSnapshot, SessionState,
};

pub const UNREADABLE_RECORDING_MESSAGE: &str =
    "The selected recording could not be read. Please select it again.";

/// Drives one user session: file selection, the single in-flight verification,
/// and the rolling history.
pub struct VerificationService {
    session: Arc<Mutex<SessionState>>,
    encoder: Arc<dyn AudioEncoder>,
    client: Arc<dyn DetectionClient>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VerifyOutcome {
    NoFile,
    AlreadyRunning,
    Completed(DetectionResult),
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum VerificationError {
    #[error(transparent)]
    InvalidFile(#[from] AudioSampleError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl VerificationService {
    pub fn new(encoder: Arc<dyn AudioEncoder>, client: Arc<dyn DetectionClient>) -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionState::new())),
            encoder,
            client,
        }
    }

    /// Validates an uploaded file and makes it the current sample.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn select_upload(
        &self,
        file_name: &str,
        mime_type: Option<String>,
        data: Bytes,
    ) -> Result<SessionSnapshot, VerificationError> {
        let sample = AudioSample::from_bytes(file_name, mime_type, data).map_err(|e| {
            tracing::warn!(error = %e, "Rejected file selection");
            e
        })?;
        self.select_file(sample).await
    }

    pub async fn select_file(
        &self,
        sample: AudioSample,
    ) -> Result<SessionSnapshot, VerificationError> {
        let mut session = self.session.lock().await;
        let file_name = sample.file_name.clone();
        session.select_file(sample)?;
        tracing::info!(file_name = %file_name, "Audio sample selected");
        Ok(session.snapshot())
    }

    pub async fn select_language(
        &self,
        language: Language,
    ) -> Result<SessionSnapshot, VerificationError> {
        let mut session = self.session.lock().await;
        session.select_language(language)?;
        tracing::debug!(language = %language, "Language hint changed");
        Ok(session.snapshot())
    }

    /// Runs start, encode, classify and complete.
    ///
    /// The session lock is released while the provider call is outstanding. The
    /// call runs on its own task so the session is completed even when the
    /// caller stops waiting.
    #[tracing::instrument(skip(self))]
    pub async fn verify(&self) -> VerifyOutcome {
        let pending = {
            let mut session = self.session.lock().await;
            if session.is_in_flight() {
                tracing::debug!("Verification already in flight");
                return VerifyOutcome::AlreadyRunning;
            }
            match session.start_verification() {
                Some(pending) => pending,
                None => return VerifyOutcome::NoFile,
            }
        };

        tracing::info!(
            file_name = %pending.sample.file_name,
            language = %pending.language,
            "Starting verification"
        );

        let session = Arc::clone(&self.session);
        let encoder = Arc::clone(&self.encoder);
        let client = Arc::clone(&self.client);
        let task_pending = pending.clone();

        let handle = tokio::spawn(async move {
            let result = run_detection(encoder.as_ref(), client.as_ref(), &task_pending).await;
            session
                .lock()
                .await
                .complete_verification(&task_pending, result.clone());
            result
        });

        match handle.await {
            Ok(result) => {
                tracing::info!(success = result.is_success(), "Verification completed");
                VerifyOutcome::Completed(result)
            }
            Err(e) => {
                tracing::error!(error = %e, "Verification task aborted");
                let result = DetectionResult::failure(
                    "The verification could not be completed. Please try again.",
                );
                self.session
                    .lock()
                    .await
                    .complete_verification(&pending, result.clone());
                VerifyOutcome::Completed(result)
            }
        }
    }

    pub async fn reset(&self) -> Result<SessionSnapshot, VerificationError> {
        let mut session = self.session.lock().await;
        session.reset()?;
        tracing::info!("Session reset");
        Ok(session.snapshot())
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }
}

async fn run_detection(
    encoder: &dyn AudioEncoder,
    client: &dyn DetectionClient,
    pending: &PendingVerification,
) -> DetectionResult {
    match encoder.encode(&pending.sample).await {
        Ok(payload) => {
            tracing::debug!(encoded_len = payload.len(), "Audio sample encoded");
            client.classify(&payload, pending.language).await
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode audio sample");
            DetectionResult::failure(UNREADABLE_RECORDING_MESSAGE)
        }
    }
}
