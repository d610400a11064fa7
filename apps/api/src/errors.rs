use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::validator::ValidationError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant surfaces as HTTP 500 with `{"detail": <message>}`; the
/// variants differ only in message text and log line.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Completion service error: {0}")]
    Llm(#[from] LlmError),

    #[error("{0}")]
    InvalidOutput(#[from] ValidationError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
            AppError::InvalidOutput(e) => tracing::warn!("Rejected model output: {e}"),
        }

        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}
