// Project staffing pipeline: analyzer → recommender → allocator.
// All LLM calls go through llm_client::CompletionClient.

pub mod allocator;
pub mod analyzer;
pub mod handlers;
pub mod orchestrator;
pub mod prompts;
pub mod recommender;
pub mod state;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::pipeline::state::{ProjectState, StateUpdate};

/// One step of the pipeline.
///
/// A stage reads the accumulated state through a shared borrow and returns a
/// delta; only the orchestrator mutates `ProjectState`.
#[async_trait]
pub trait Stage: Send + Sync {
    /// Short stable name used in logs.
    fn name(&self) -> &'static str;

    async fn run(&self, state: &ProjectState) -> Result<StateUpdate, AppError>;
}
