pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/generate-resume", post(handlers::handle_generate_resume))
        .route(
            "/api/generate-cover-letter",
            post(handlers::handle_generate_cover_letter),
        )
        .route(
            "/api/generate-resume-advice",
            post(handlers::handle_generate_advice),
        )
        .with_state(state)
}

/// CORS for the single configured frontend origin. Any method and header is
/// allowed from it; credentials require mirroring rather than wildcards.
pub fn cors_layer(frontend_url: &str) -> Result<CorsLayer> {
    let origin: HeaderValue = frontend_url
        .parse()
        .with_context(|| format!("FRONTEND_URL '{frontend_url}' is not a valid origin"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
