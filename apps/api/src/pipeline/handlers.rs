//! Axum route handlers for the staffing pipeline.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::pipeline::state::PipelineResult;
use crate::roster::Candidate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub project: String,
}

#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub candidates: Vec<Candidate>,
}

/// POST /api/v1/analyze
///
/// Runs analyzer → recommender → allocator for one project description.
/// Always returns a two-person team on success (real or fallback).
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<PipelineResult>, AppError> {
    if request.project.trim().is_empty() {
        return Err(AppError::Validation("project cannot be empty".to_string()));
    }

    let result = state.pipeline.run(&request.project).await?;
    Ok(Json(result))
}

/// GET /api/v1/roster
pub async fn handle_get_roster(State(state): State<AppState>) -> Json<RosterResponse> {
    Json(RosterResponse {
        candidates: state.roster.candidates().to_vec(),
    })
}
