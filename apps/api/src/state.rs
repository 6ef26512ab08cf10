use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionClient;
use crate::pipeline::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-process session registry. Sessions share nothing with each other;
    /// the only cross-request state is this map of independent sessions.
    pub store: SessionStore,
    /// Pluggable completion client. Production: `LlmClient` (Anthropic).
    /// Tests substitute a scripted client through the same trait.
    pub llm: Arc<dyn CompletionClient>,
    pub config: Config,
}
