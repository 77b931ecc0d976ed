use thiserror::Error;

use tourbot_core::TourbotError;

/// Errors from the vector index and embedding subsystem.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("API key not set: {0}")]
    MissingApiKey(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("embedding API returned {code}: {body}")]
    Status { code: u16, body: String },

    #[error("embedding error: {0}")]
    Embedding(String),

    #[error("dimension mismatch: index has {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for IndexError {
    fn from(err: reqwest::Error) -> Self {
        IndexError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        IndexError::Snapshot(err.to_string())
    }
}

impl From<IndexError> for TourbotError {
    fn from(err: IndexError) -> Self {
        match err {
            IndexError::Io(e) => TourbotError::Io(e),
            other => TourbotError::Index(other.to_string()),
        }
    }
}
