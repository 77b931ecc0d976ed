use thiserror::Error;

use tourbot_core::TourbotError;

/// Errors from a chat-completion request.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("API key not set: {0}")]
    MissingApiKey(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("completion API returned {code}: {body}")]
    Status { code: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        CompletionError::Transport(err.to_string())
    }
}

impl From<CompletionError> for TourbotError {
    fn from(err: CompletionError) -> Self {
        TourbotError::Completion(err.to_string())
    }
}
