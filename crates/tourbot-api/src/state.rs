//! Application state shared across route handlers.

use std::sync::Arc;
use std::time::Instant;

use tourbot_chat::ConversationOrchestrator;
use tourbot_core::TourbotConfig;

/// Shared application state, cheap to clone into handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<TourbotConfig>,
    /// The one process-wide conversation pipeline.
    pub orchestrator: Arc<ConversationOrchestrator>,
    /// Passage count of the loaded index, for health reporting.
    pub indexed_passages: usize,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        config: TourbotConfig,
        orchestrator: Arc<ConversationOrchestrator>,
        indexed_passages: usize,
    ) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator,
            indexed_passages,
            start_time: Instant::now(),
        }
    }
}
