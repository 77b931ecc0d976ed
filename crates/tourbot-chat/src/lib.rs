//! Conversational core for TourBot.
//!
//! Composes query rewriting, deduplicated retrieval, and grounded answer
//! generation into the turn-processing pipeline behind the request handler.
//! The orchestrator never fails a turn: model errors degrade to fallback
//! strings and retrieval errors degrade to an empty context.

pub mod generate;
pub mod orchestrator;
pub mod retriever;
pub mod rewrite;
pub mod session;
pub mod types;

pub use generate::{AnswerGenerator, GENERATION_APOLOGY, REFUSAL_SENTENCE};
pub use orchestrator::ConversationOrchestrator;
pub use retriever::Retriever;
pub use rewrite::QueryRewriter;
pub use session::SessionState;
pub use types::TurnOutcome;
