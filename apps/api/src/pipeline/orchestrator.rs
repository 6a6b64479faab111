//! Pipeline orchestrator — threads one `ProjectState` through a fixed stage chain.
//!
//! Flow: analyzer (summary) → recommender (tech_stack) → allocator (team).
//! No branching and no retries. The first failing stage aborts the run and
//! no partial state is returned.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::pipeline::allocator::StudentAllocator;
use crate::pipeline::analyzer::ProjectAnalyzer;
use crate::pipeline::recommender::TechRecommender;
use crate::pipeline::state::{PipelineResult, ProjectState};
use crate::pipeline::Stage;
use crate::roster::Roster;

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(llm: Arc<dyn CompletionClient>, roster: Arc<Roster>) -> Self {
        Self {
            stages: vec![
                Box::new(ProjectAnalyzer::new(llm.clone())),
                Box::new(TechRecommender::new(llm.clone())),
                Box::new(StudentAllocator::new(llm, roster)),
            ],
        }
    }

    #[cfg(test)]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Runs every stage in order against a fresh state for `project`.
    pub async fn run(&self, project: &str) -> Result<PipelineResult, AppError> {
        let run_id = Uuid::new_v4();
        self.run_stages(ProjectState::new(project))
            .instrument(info_span!("pipeline_run", %run_id))
            .await
    }

    async fn run_stages(&self, mut state: ProjectState) -> Result<PipelineResult, AppError> {
        info!("Pipeline started ({} chars of project text)", state.project.len());

        for stage in &self.stages {
            info!("Running stage '{}'", stage.name());
            let update = stage.run(&state).await?;
            state.apply(update)?;
            info!("Stage '{}' complete", stage.name());
        }

        let result = state.into_result()?;
        info!("Pipeline finished: team={:?}", result.team);
        Ok(result)
    }
}
