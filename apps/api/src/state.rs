use std::sync::Arc;

use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion client. Default: OpenAiClient. Tests inject a stub.
    pub llm: Arc<dyn CompletionClient>,
}
