//! Router setup with all API routes and middleware.

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS: allow localhost origins on the configured port for a local UI.
    let port = state.config.server.port;
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            [
                format!("http://127.0.0.1:{}", port),
                format!("http://localhost:{}", port),
            ]
            .iter()
            .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/ask", post(handlers::ask))
        .route("/reset", post(handlers::reset))
        .route("/history", get(handlers::history))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
