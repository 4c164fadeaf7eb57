use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every analysis is independent.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Default: `OpenAiClient`.
    pub llm: Arc<dyn CompletionModel>,
    pub config: Config,
}
