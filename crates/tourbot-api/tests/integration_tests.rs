//! Integration tests for the TourBot API.
//!
//! Drives the router end to end against scripted language-model and
//! vector-search stubs, so every test is deterministic and offline.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use tourbot_api::handlers::{AskResponse, HealthResponse, HistoryResponse, ResetResponse};
use tourbot_api::{create_router, AppState};
use tourbot_chat::ConversationOrchestrator;
use tourbot_core::{Passage, Role, TourbotConfig};
use tourbot_index::{IndexError, VectorSearch};
use tourbot_llm::{ChatMessage, CompletionError, LanguageModel};

// =============================================================================
// Stubs
// =============================================================================

/// Answers with a fixed string; echoes the follow-up input for rewrites.
struct ScriptedModel {
    answer: String,
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _temperature: f32,
    ) -> Result<String, CompletionError> {
        let last = messages.last().unwrap();
        if let Some(rest) = last.content.split("Follow Up Input: ").nth(1) {
            return Ok(rest.to_string());
        }
        Ok(self.answer.clone())
    }
}

/// Fixed candidate pool, truncated to k.
struct StubSearch {
    passages: Vec<Passage>,
}

#[async_trait]
impl VectorSearch for StubSearch {
    async fn query(&self, _text: &str, k: usize) -> Result<Vec<Passage>, IndexError> {
        Ok(self.passages.iter().take(k).cloned().collect())
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn make_state() -> AppState {
    let config = TourbotConfig::default();
    let model = Arc::new(ScriptedModel {
        answer: "I'm TourBot! The Eiffel Tower is 330 metres tall.".to_string(),
    });
    let search = Arc::new(StubSearch {
        passages: (0..10).map(|i| Passage::new(format!("passage {}", i))).collect(),
    });
    let orchestrator = Arc::new(ConversationOrchestrator::new(
        model,
        search,
        &config.retrieval,
        &config.chat,
    ));
    let passages = 10;
    AppState::new(config, orchestrator, passages)
}

fn make_app() -> axum::Router {
    create_router(make_state())
}

fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

// =============================================================================
// /health
// =============================================================================

#[tokio::test]
async fn test_health_happy_path() {
    let app = make_app();
    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.indexed_passages, 10);
}

// =============================================================================
// /ask
// =============================================================================

#[tokio::test]
async fn test_ask_happy_path() {
    let app = make_app();
    let resp = app
        .oneshot(post_json("/ask", r#"{"question":"What is the Eiffel Tower?"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: AskResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body.question, "What is the Eiffel Tower?");
    assert!(body.answer.contains("TourBot"));
    assert!(body.context.contains("passage 0"));
    assert_eq!(body.history.len(), 2);
    assert_eq!(body.history[0].role, Role::User);
}

#[tokio::test]
async fn test_ask_blank_question_is_bad_request() {
    let app = make_app();
    let resp = app
        .oneshot(post_json("/ask", r#"{"question":"   "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_ask_missing_field_rejected() {
    let app = make_app();
    let resp = app
        .oneshot(post_json("/ask", r#"{"q":"wrong key"}"#))
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_ask_dedup_across_requests() {
    let state = make_state();

    let resp = create_router(state.clone())
        .oneshot(post_json("/ask", r#"{"question":"question one"}"#))
        .await
        .unwrap();
    let first: AskResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();

    let resp = create_router(state)
        .oneshot(post_json("/ask", r#"{"question":"question one again"}"#))
        .await
        .unwrap();
    let second: AskResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();

    // Second ask must ground on passages the first ask did not surface.
    assert!(first.context.contains("passage 0"));
    assert!(!second.context.contains("passage 0"));
    assert!(second.context.contains("passage 4"));
    assert_eq!(second.history.len(), 4);
}

// =============================================================================
// /reset and /history
// =============================================================================

#[tokio::test]
async fn test_reset_clears_session() {
    let state = make_state();

    create_router(state.clone())
        .oneshot(post_json("/ask", r#"{"question":"q1"}"#))
        .await
        .unwrap();

    let resp = create_router(state.clone())
        .oneshot(post_empty("/reset"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ResetResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(body.cleared);

    let resp = create_router(state)
        .oneshot(Request::get("/history").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body: HistoryResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(body.history.is_empty());
    assert!(body.last_question.is_none());
    assert!(body.last_context.is_none());
}

#[tokio::test]
async fn test_history_reflects_turns() {
    let state = make_state();

    create_router(state.clone())
        .oneshot(post_json("/ask", r#"{"question":"Where is the Louvre?"}"#))
        .await
        .unwrap();

    let resp = create_router(state)
        .oneshot(Request::get("/history").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: HistoryResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body.history.len(), 2);
    assert_eq!(body.last_question.as_deref(), Some("Where is the Louvre?"));
    assert!(body.last_context.as_deref().unwrap().contains("passage 0"));
}

#[tokio::test]
async fn test_history_empty_on_fresh_state() {
    let app = make_app();
    let resp = app
        .oneshot(Request::get("/history").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body: HistoryResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(body.history.is_empty());
}
