//! Project Analyzer — summarizes the raw description and classifies it as web, data, or mobile.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::pipeline::prompts::ANALYZER_PROMPT_TEMPLATE;
use crate::pipeline::state::{ProjectState, StateUpdate};
use crate::pipeline::Stage;

pub struct ProjectAnalyzer {
    llm: Arc<dyn CompletionClient>,
}

impl ProjectAnalyzer {
    pub fn new(llm: Arc<dyn CompletionClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Stage for ProjectAnalyzer {
    fn name(&self) -> &'static str {
        "analyzer"
    }

    /// The summary is stored verbatim; no parsing.
    async fn run(&self, state: &ProjectState) -> Result<StateUpdate, AppError> {
        let prompt = ANALYZER_PROMPT_TEMPLATE.replace("{project}", &state.project);
        let summary = self
            .llm
            .complete(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Project analysis failed: {e}")))?;
        Ok(StateUpdate::Summary(summary))
    }
}
