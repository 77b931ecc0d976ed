use thiserror::Error;

/// Top-level error type for the TourBot system.
///
/// Subsystem crates define their own error types and convert into
/// `TourbotError` at crate boundaries so that the `?` operator works
/// across the workspace.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TourbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Ingest error: {0}")]
    Ingest(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for TourbotError {
    fn from(err: toml::de::Error) -> Self {
        TourbotError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TourbotError {
    fn from(err: serde_json::Error) -> Self {
        TourbotError::Serialization(err.to_string())
    }
}

/// Convenience result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TourbotError>;
