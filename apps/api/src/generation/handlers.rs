//! Axum route handlers for the Generation API.
//!
//! Envelope validation is left to the `Json` extractor; each handler only
//! picks its artifact kind and hands off to the pipeline.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::pipeline::{generate, Artifact, ArtifactKind};
use crate::models::request::ResumeRequest;
use crate::state::AppState;

/// POST /api/generate-resume
///
/// Returns `{success: true, resume: ResumeProfile}`.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Artifact, AppError> {
    generate(state.llm.as_ref(), ArtifactKind::Resume, &request).await
}

/// POST /api/generate-cover-letter
///
/// Returns `{success: true, cover_letter: string}`.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Artifact, AppError> {
    generate(state.llm.as_ref(), ArtifactKind::CoverLetter, &request).await
}

/// POST /api/generate-resume-advice
///
/// Returns `{success: true, advice: string}`.
pub async fn handle_generate_advice(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Artifact, AppError> {
    generate(state.llm.as_ref(), ArtifactKind::Advice, &request).await
}
