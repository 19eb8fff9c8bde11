use std::sync::Arc;

use crate::config::Config;
use crate::extraction::StructuringStrategy;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable structuring strategy. Selected once at startup via
    /// `PARSER_STRATEGY`; every parse request goes through this.
    pub strategy: Arc<dyn StructuringStrategy>,
    pub config: Config,
}
