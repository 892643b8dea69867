use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::Language;

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<&'static str>,
    pub default: &'static str,
}

pub async fn languages_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LanguagesResponse {
            languages: Language::ALL.iter().map(Language::as_str).collect(),
            default: Language::default().as_str(),
        }),
    )
}
