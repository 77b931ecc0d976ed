use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, TourbotError};

/// Top-level configuration for the TourBot application.
///
/// Loaded from `~/.tourbot/config.toml` by default. Each section corresponds
/// to one bounded concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TourbotConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
}

impl TourbotConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TourbotConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| TourbotError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Data directory holding the index snapshot.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.tourbot/data".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the API server.
    pub host: String,
    /// API server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7070,
        }
    }
}

/// Chat-completion service configuration (OpenAI-compatible).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the chat-completions API.
    pub api_base: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Model identifier passed in each request.
    pub model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.groq.com/openai/v1".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Embedding service configuration (OpenAI-compatible).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Base URL of the embeddings API.
    pub api_base: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Embedding model identifier.
    pub model: String,
    /// Dimensionality of the vectors the model produces.
    pub dimensions: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            model: "text-embedding-3-small".to_string(),
            dimensions: 1536,
            timeout_secs: 30,
        }
    }
}

/// Retrieval breadth and context-size settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Candidates fetched from the index per query.
    pub candidate_k: usize,
    /// Unseen passages kept for the answer context.
    pub max_passages: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            candidate_k: 10,
            max_passages: 4,
        }
    }
}

/// Conversation window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Maximum turns kept in the session history (user + assistant).
    pub max_history_turns: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_history_turns: 8,
        }
    }
}

/// Corpus ingestion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Target chunk size in characters.
    pub chunk_size: usize,
    /// Overlap between consecutive chunks in characters.
    pub chunk_overlap: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            chunk_size: 800,
            chunk_overlap: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TourbotConfig::default();
        assert_eq!(config.server.port, 7070);
        assert_eq!(config.retrieval.candidate_k, 10);
        assert_eq!(config.retrieval.max_passages, 4);
        assert_eq!(config.chat.max_history_turns, 8);
        assert_eq!(config.ingest.chunk_size, 800);
        assert_eq!(config.ingest.chunk_overlap, 100);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = TourbotConfig::default();
        config.server.port = 9090;
        config.llm.model = "llama3-8b-8192".to_string();
        config.save(&path).unwrap();

        let loaded = TourbotConfig::load(&path).unwrap();
        assert_eq!(loaded.server.port, 9090);
        assert_eq!(loaded.llm.model, "llama3-8b-8192");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = TourbotConfig::load(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = TourbotConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.server.port, 7070);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TourbotConfig = toml::from_str(
            r#"
            [server]
            port = 8081
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8081);
        // Unspecified sections fall back to defaults.
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.retrieval.candidate_k, 10);
        assert_eq!(config.llm.api_key_env, "GROQ_API_KEY");
    }

    #[test]
    fn test_load_or_default_on_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not toml [[[").unwrap();
        let config = TourbotConfig::load_or_default(&path);
        assert_eq!(config.chat.max_history_turns, 8);
    }
}
