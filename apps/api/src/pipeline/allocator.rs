//! Student Allocator — asks the model to pick two students for the recommended stack,
//! then resolves its picks against the roster.
//!
//! The roster is the system of record: the model's echoed visa value is ignored.
//! Anything short of two resolvable students is replaced wholesale by
//! `FALLBACK_TEAM`, never topped up.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::extract_json;
use crate::llm_client::CompletionClient;
use crate::pipeline::prompts::ALLOCATOR_PROMPT_TEMPLATE;
use crate::pipeline::state::{ProjectState, StateUpdate};
use crate::pipeline::Stage;
use crate::roster::Roster;

pub const TEAM_SIZE: usize = 2;

pub const FALLBACK_TEAM: [&str; TEAM_SIZE] = ["Generic OPT student", "Generic STEM OPT student"];

pub struct StudentAllocator {
    llm: Arc<dyn CompletionClient>,
    roster: Arc<Roster>,
}

impl StudentAllocator {
    pub fn new(llm: Arc<dyn CompletionClient>, roster: Arc<Roster>) -> Self {
        Self { llm, roster }
    }

    fn build_prompt(&self, tech_stack: &str) -> Result<String, AppError> {
        let students_json = self.roster.to_prompt_json()?;
        Ok(ALLOCATOR_PROMPT_TEMPLATE
            .replace("{students_json}", &students_json)
            .replace("{tech_stack}", tech_stack))
    }
}

#[async_trait]
impl Stage for StudentAllocator {
    fn name(&self) -> &'static str {
        "allocator"
    }

    async fn run(&self, state: &ProjectState) -> Result<StateUpdate, AppError> {
        let tech_stack = state.require_tech_stack()?;
        let prompt = self.build_prompt(tech_stack)?;

        let response = self
            .llm
            .complete(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Student allocation failed: {e}")))?;

        let payload = extract_json(&response);
        if payload.is_empty() {
            warn!(
                "Allocator response held no JSON object: {:?}",
                response.chars().take(80).collect::<String>()
            );
        }

        Ok(StateUpdate::Team(select_team(&self.roster, &payload)))
    }
}

/// Resolves the model's `selected` list against the roster.
///
/// Walks entries in model order, skipping ones without a string `name` and
/// names not on the roster. Every roster match is accepted, repeats included.
/// Stops at `TEAM_SIZE` accepted. Returns `FALLBACK_TEAM` if fewer were accepted.
pub fn select_team(roster: &Roster, payload: &Map<String, Value>) -> Vec<String> {
    let selected = payload
        .get("selected")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut team = Vec::with_capacity(TEAM_SIZE);

    for entry in selected {
        let Some(name) = entry.get("name").and_then(Value::as_str) else {
            continue;
        };
        match roster.find(name) {
            Some(candidate) => team.push(candidate.label()),
            None => warn!("Model selected unknown student {name:?}; skipping"),
        }
        if team.len() == TEAM_SIZE {
            break;
        }
    }

    if team.len() < TEAM_SIZE {
        warn!(
            "Only {} of {} students resolved from model output; using fallback team",
            team.len(),
            TEAM_SIZE
        );
        return fallback_team();
    }

    info!("Allocated team: {}", team.join(", "));
    team
}

pub fn fallback_team() -> Vec<String> {
    FALLBACK_TEAM.iter().map(|s| s.to_string()).collect()
}
