use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::{VerificationError, VerifyOutcome};
use crate::domain::{AudioSample, AudioSampleError, Language, SessionError};
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize)]
pub struct LanguageRequest {
    pub language: String,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

fn verification_error_response(error: VerificationError) -> Response {
    let status = match &error {
        VerificationError::InvalidFile(AudioSampleError::InvalidFileType { .. }) => {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        }
        VerificationError::InvalidFile(AudioSampleError::EmptySample(_)) => StatusCode::BAD_REQUEST,
        VerificationError::Session(SessionError::VerificationInFlight) => StatusCode::CONFLICT,
    };
    error_response(status, error.to_string())
}

pub async fn session_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(state.verification_service.snapshot().await),
    )
}

#[tracing::instrument(skip(state, multipart))]
pub async fn select_file_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.file_name().is_some() || f.name() == Some(FILE_FIELD) => break f,
            Ok(Some(f)) => {
                tracing::debug!(field = ?f.name(), "Skipping non-file form field");
            }
            Ok(None) => {
                tracing::warn!("File selection with no file");
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        }
    };

    let file_name = field.file_name().unwrap_or("unknown").to_string();
    let mime_type = field.content_type().map(String::from);

    tracing::debug!(file_name = %file_name, mime_type = ?mime_type, "Processing file selection");

    if !AudioSample::is_mp3(&file_name, mime_type.as_deref()) {
        let error = VerificationError::InvalidFile(AudioSampleError::InvalidFileType {
            file_name,
            mime_type,
        });
        tracing::warn!(error = %error, "Rejected file selection before reading body");
        return verification_error_response(error);
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(StatusCode::BAD_REQUEST, format!("Failed to read file: {}", e));
        }
    };

    match state
        .verification_service
        .select_upload(&file_name, mime_type, data)
        .await
    {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(e) => verification_error_response(e),
    }
}

pub async fn select_language_handler(
    State(state): State<AppState>,
    Json(request): Json<LanguageRequest>,
) -> Response {
    let language = match request.language.parse::<Language>() {
        Ok(l) => l,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match state.verification_service.select_language(language).await {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(e) => verification_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn verify_handler(State(state): State<AppState>) -> Response {
    match state.verification_service.verify().await {
        VerifyOutcome::Completed(result) => (StatusCode::OK, Json(result)).into_response(),
        VerifyOutcome::NoFile => {
            error_response(StatusCode::BAD_REQUEST, "Select an MP3 recording first")
        }
        VerifyOutcome::AlreadyRunning => error_response(
            StatusCode::CONFLICT,
            SessionError::VerificationInFlight.to_string(),
        ),
    }
}

pub async fn reset_handler(State(state): State<AppState>) -> Response {
    match state.verification_service.reset().await {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(e) => verification_error_response(e),
    }
}
