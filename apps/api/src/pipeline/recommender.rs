//! Tech Recommender — turns the analyzer's summary into a short stack recommendation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::pipeline::prompts::RECOMMENDER_PROMPT_TEMPLATE;
use crate::pipeline::state::{ProjectState, StateUpdate};
use crate::pipeline::Stage;

pub struct TechRecommender {
    llm: Arc<dyn CompletionClient>,
}

impl TechRecommender {
    pub fn new(llm: Arc<dyn CompletionClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Stage for TechRecommender {
    fn name(&self) -> &'static str {
        "recommender"
    }

    async fn run(&self, state: &ProjectState) -> Result<StateUpdate, AppError> {
        let summary = state.require_summary()?;
        let prompt = RECOMMENDER_PROMPT_TEMPLATE.replace("{summary}", summary);
        let tech_stack = self
            .llm
            .complete(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Tech stack recommendation failed: {e}")))?;
        Ok(StateUpdate::TechStack(tech_stack))
    }
}
