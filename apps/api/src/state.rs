use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Evaluation backend. Production: `LlmClient`; tests swap in a fake.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
