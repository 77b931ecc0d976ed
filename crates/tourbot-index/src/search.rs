//! Text-query search over the vector index.
//!
//! [`VectorSearch`] is the narrow interface the conversation core consumes:
//! a query string in, relevance-ordered passages out. [`SemanticSearcher`]
//! implements it by embedding the query and searching a [`FlatIndex`].

use std::sync::Arc;

use async_trait::async_trait;

use tourbot_core::Passage;

use crate::embedding::EmbeddingService;
use crate::error::IndexError;
use crate::index::FlatIndex;

/// Query-by-text vector search.
///
/// Must return at most `k` passages ordered by descending relevance; an
/// empty result is valid (no match).
#[async_trait]
pub trait VectorSearch: Send + Sync {
    async fn query(&self, text: &str, k: usize) -> Result<Vec<Passage>, IndexError>;
}

/// Embeds a query and searches the flat index.
pub struct SemanticSearcher<E: EmbeddingService> {
    embedder: E,
    index: Arc<FlatIndex>,
}

impl<E: EmbeddingService> SemanticSearcher<E> {
    pub fn new(embedder: E, index: Arc<FlatIndex>) -> Self {
        Self { embedder, index }
    }

    /// Number of passages available to search.
    pub fn indexed_passages(&self) -> usize {
        self.index.len()
    }
}

#[async_trait]
impl<E: EmbeddingService> VectorSearch for SemanticSearcher<E> {
    async fn query(&self, text: &str, k: usize) -> Result<Vec<Passage>, IndexError> {
        let embedding = self.embedder.embed(text).await?;
        let hits = self.index.search(&embedding, k)?;
        Ok(hits.into_iter().map(|hit| hit.passage).collect())
    }
}
