//! Per-run pipeline state and the deltas stages return.
//!
//! Fields fill strictly in order: summary → tech_stack → team.
//! `apply` refuses any update that would skip or reorder a step.

use anyhow::anyhow;
use serde::Serialize;

use crate::errors::AppError;

/// Accumulated context for a single pipeline run. Owned by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectState {
    pub project: String,
    pub summary: Option<String>,
    pub tech_stack: Option<String>,
    pub team: Option<Vec<String>>,
}

/// The partial update a stage hands back to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateUpdate {
    Summary(String),
    TechStack(String),
    Team(Vec<String>),
}

/// Terminal state of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    pub summary: String,
    pub tech_stack: String,
    pub team: Vec<String>,
}

impl ProjectState {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            summary: None,
            tech_stack: None,
            team: None,
        }
    }

    /// Merges a stage's delta, enforcing pipeline order.
    pub fn apply(&mut self, update: StateUpdate) -> Result<(), AppError> {
        match update {
            StateUpdate::Summary(summary) => {
                if self.summary.is_some() {
                    return Err(order_violation("summary written twice"));
                }
                self.summary = Some(summary);
            }
            StateUpdate::TechStack(tech_stack) => {
                if self.summary.is_none() {
                    return Err(order_violation("tech_stack written before summary"));
                }
                if self.tech_stack.is_some() {
                    return Err(order_violation("tech_stack written twice"));
                }
                self.tech_stack = Some(tech_stack);
            }
            StateUpdate::Team(team) => {
                if self.tech_stack.is_none() {
                    return Err(order_violation("team written before tech_stack"));
                }
                if self.team.is_some() {
                    return Err(order_violation("team written twice"));
                }
                self.team = Some(team);
            }
        }
        Ok(())
    }

    pub fn require_summary(&self) -> Result<&str, AppError> {
        self.summary
            .as_deref()
            .ok_or_else(|| order_violation("summary is not available yet"))
    }

    pub fn require_tech_stack(&self) -> Result<&str, AppError> {
        self.tech_stack
            .as_deref()
            .ok_or_else(|| order_violation("tech_stack is not available yet"))
    }

    /// Converts a fully populated state into the caller-facing result.
    pub fn into_result(self) -> Result<PipelineResult, AppError> {
        match (self.summary, self.tech_stack, self.team) {
            (Some(summary), Some(tech_stack), Some(team)) => Ok(PipelineResult {
                summary,
                tech_stack,
                team,
            }),
            _ => Err(order_violation("pipeline finished with missing fields")),
        }
    }
}

fn order_violation(detail: &str) -> AppError {
    AppError::Internal(anyhow!("Pipeline state out of order: {detail}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updates_in_order_produce_result() {
        let mut state = ProjectState::new("A todo app");
        state.apply(StateUpdate::Summary("web".into())).unwrap();
        state.apply(StateUpdate::TechStack("React".into())).unwrap();
        state
            .apply(StateUpdate::Team(vec!["a".into(), "b".into()]))
            .unwrap();

        let result = state.into_result().unwrap();
        assert_eq!(result.summary, "web");
        assert_eq!(result.tech_stack, "React");
        assert_eq!(result.team.len(), 2);
    }

    #[test]
    fn test_tech_stack_before_summary_is_rejected() {
        let mut state = ProjectState::new("p");
        let err = state
            .apply(StateUpdate::TechStack("Rust".into()))
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert!(state.tech_stack.is_none());
    }

    #[test]
    fn test_team_before_tech_stack_is_rejected() {
        let mut state = ProjectState::new("p");
        state.apply(StateUpdate::Summary("s".into())).unwrap();
        assert!(state.apply(StateUpdate::Team(vec![])).is_err());
        assert!(state.team.is_none());
    }

    #[test]
    fn test_double_write_is_rejected() {
        let mut state = ProjectState::new("p");
        state.apply(StateUpdate::Summary("first".into())).unwrap();
        assert!(state.apply(StateUpdate::Summary("second".into())).is_err());
        assert_eq!(state.summary.as_deref(), Some("first"));
    }

    #[test]
    fn test_require_accessors_follow_population() {
        let mut state = ProjectState::new("p");
        assert!(state.require_summary().is_err());
        state.apply(StateUpdate::Summary("s".into())).unwrap();
        assert_eq!(state.require_summary().unwrap(), "s");
        assert!(state.require_tech_stack().is_err());
    }

    #[test]
    fn test_partial_state_has_no_result() {
        let mut state = ProjectState::new("p");
        state.apply(StateUpdate::Summary("s".into())).unwrap();
        assert!(state.into_result().is_err());
    }
}
