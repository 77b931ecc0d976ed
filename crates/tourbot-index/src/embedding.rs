//! Embedding service trait and implementations.
//!
//! - `HttpEmbeddingService` calls an OpenAI-compatible `/embeddings` endpoint
//!   (e.g. `text-embedding-3-small`). This is the production backend.
//! - `MockEmbedding` provides deterministic hash-based vectors for testing
//!   and offline runs.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tourbot_core::config::EmbeddingConfig;

use crate::error::IndexError;

/// Service for generating text embeddings.
///
/// Implementations convert text into fixed-dimensional vectors used for both
/// ingestion (indexing) and search (query embedding).
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// Generate an embedding vector for the given text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, IndexError>;

    /// Return the dimensionality of vectors produced by this service.
    fn dimensions(&self) -> usize;
}

// ---------------------------------------------------------------------------
// HttpEmbeddingService - OpenAI-compatible embeddings endpoint
// ---------------------------------------------------------------------------

/// Embedding client for an OpenAI-compatible `/embeddings` endpoint.
#[derive(Clone)]
pub struct HttpEmbeddingService {
    base_url: String,
    api_key: String,
    model: String,
    dimensions: usize,
    client: Client,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl HttpEmbeddingService {
    /// Build a client from configuration, reading the API key from the
    /// environment variable the config names.
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self, IndexError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| IndexError::MissingApiKey(config.api_key_env.clone()))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            dimensions: config.dimensions,
            client,
        })
    }

    /// Build a client with explicit parameters (used by tests and tools).
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        dimensions: usize,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            dimensions,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl EmbeddingService for HttpEmbeddingService {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, IndexError> {
        let url = format!("{}/embeddings", self.base_url);
        let body = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        debug!(model = %self.model, chars = text.len(), "Requesting embedding");

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(IndexError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let payload: EmbeddingResponse = res
            .json()
            .await
            .map_err(|e| IndexError::Embedding(e.to_string()))?;

        let vector = payload
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| IndexError::Embedding("empty data array".to_string()))?;

        if vector.len() != self.dimensions {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }

        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

// ---------------------------------------------------------------------------
// MockEmbedding - deterministic hash-based vectors for testing
// ---------------------------------------------------------------------------

/// Mock embedding service that returns deterministic 384-dimensional vectors.
///
/// The output is derived from a hash of the input text, so identical inputs
/// always produce identical outputs. This allows testing retrieval and
/// deduplication without a real model or network access.
#[derive(Debug, Clone, Default)]
pub struct MockEmbedding;

/// Dimensionality of mock vectors.
pub const MOCK_DIMENSIONS: usize = 384;

impl MockEmbedding {
    pub fn new() -> Self {
        Self
    }

    fn hash_to_vector(text: &str) -> Vec<f32> {
        let mut result = Vec::with_capacity(MOCK_DIMENSIONS);
        for i in 0..MOCK_DIMENSIONS {
            let mut hasher = DefaultHasher::new();
            text.hash(&mut hasher);
            i.hash(&mut hasher);
            let h = hasher.finish();
            let val = ((h as f64) / (u64::MAX as f64)) * 2.0 - 1.0;
            result.push(val as f32);
        }

        // L2-normalize to unit vectors, matching the HTTP backend's output.
        let norm: f32 = result.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for val in &mut result {
                *val /= norm;
            }
        }

        result
    }
}

#[async_trait]
impl EmbeddingService for MockEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, IndexError> {
        Ok(Self::hash_to_vector(text))
    }

    fn dimensions(&self) -> usize {
        MOCK_DIMENSIONS
    }
}
