//! Chat-completion collaborator for TourBot.
//!
//! Defines the [`LanguageModel`] trait the conversation core depends on and
//! a [`GroqClient`] implementation speaking the OpenAI-compatible
//! chat-completions protocol over HTTP.

pub mod error;
pub mod groq;
pub mod provider;
pub mod types;

pub use error::CompletionError;
pub use groq::GroqClient;
pub use provider::LanguageModel;
pub use types::ChatMessage;
