use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionClient;
use crate::pipeline::orchestrator::Pipeline;
use crate::roster::Roster;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; each request gets its own `ProjectState`.
    pub pipeline: Arc<Pipeline>,
    /// Read-only after startup.
    pub roster: Arc<Roster>,
    pub config: Config,
}

impl AppState {
    pub fn new(llm: Arc<dyn CompletionClient>, roster: Arc<Roster>, config: Config) -> Self {
        Self {
            pipeline: Arc::new(Pipeline::new(llm, roster.clone())),
            roster,
            config,
        }
    }
}
