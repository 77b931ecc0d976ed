//! Route handler functions.
//!
//! Each handler extracts a JSON body via axum extractors, drives the
//! orchestrator, and returns a JSON response.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use tourbot_core::Turn;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request / response types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub question: String,
    pub context: String,
    pub answer: String,
    pub history: Vec<Turn>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub cleared: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<Turn>,
    pub last_question: Option<String>,
    pub last_context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub indexed_passages: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /ask - process one conversation turn.
pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let outcome = state
        .orchestrator
        .handle_turn(&req.question)
        .await
        .ok_or_else(|| ApiError::BadRequest("question cannot be empty".to_string()))?;

    let history = state.orchestrator.history().await;
    Ok(Json(AskResponse {
        question: outcome.question,
        context: outcome.context,
        answer: outcome.answer,
        history,
    }))
}

/// POST /reset - clear the conversation session.
pub async fn reset(State(state): State<AppState>) -> Json<ResetResponse> {
    state.orchestrator.reset().await;
    Json(ResetResponse { cleared: true })
}

/// GET /history - current conversation plus last turn's display fields.
pub async fn history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let history = state.orchestrator.history().await;
    let last = state.orchestrator.last_outcome().await;
    let (last_question, last_context) = match last {
        Some(outcome) => (Some(outcome.question), Some(outcome.context)),
        None => (None, None),
    };
    Json(HistoryResponse {
        history,
        last_question,
        last_context,
    })
}

/// GET /health - liveness plus index stats.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        indexed_passages: state.indexed_passages,
    })
}
