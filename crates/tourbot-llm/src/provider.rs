use async_trait::async_trait;

use crate::error::CompletionError;
use crate::types::ChatMessage;

/// A chat-completion service.
///
/// Implementations take an ordered list of role-tagged messages and return a
/// single generated completion. Callers treat temperature-0 output as
/// best-effort deterministic; determinism is not guaranteed by the protocol.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Request a completion for the given messages.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, CompletionError>;
}
