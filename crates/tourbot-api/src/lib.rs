//! REST surface for the TourBot conversation core.
//!
//! Exposes ask / reset / history / health over axum. Transport framing
//! only; all conversation behavior lives in `tourbot-chat`.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
