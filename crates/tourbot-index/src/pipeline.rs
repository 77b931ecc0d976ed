//! Corpus ingestion pipeline.
//!
//! Splits a source document into chunks, embeds each chunk, and inserts the
//! resulting passages into the index. Run offline by the `tourbot-ingest`
//! binary; the chat server only ever loads the finished snapshot.

use std::sync::Arc;

use tracing::{debug, info};

use tourbot_core::Passage;

use crate::chunker::Chunker;
use crate::embedding::EmbeddingService;
use crate::error::IndexError;
use crate::index::FlatIndex;

/// Chunk-embed-insert pipeline over a [`FlatIndex`].
pub struct IngestPipeline<E: EmbeddingService> {
    index: Arc<FlatIndex>,
    embedder: E,
    chunker: Chunker,
}

impl<E: EmbeddingService> IngestPipeline<E> {
    pub fn new(index: Arc<FlatIndex>, embedder: E, chunker: Chunker) -> Self {
        Self {
            index,
            embedder,
            chunker,
        }
    }

    /// Ingest one document: chunk, embed, insert.
    ///
    /// Returns the number of passages added. An empty or whitespace-only
    /// document yields zero passages and is not an error.
    pub async fn ingest_document(
        &self,
        text: &str,
        source: Option<&str>,
    ) -> Result<usize, IndexError> {
        if text.trim().is_empty() {
            debug!(source = source.unwrap_or("<unnamed>"), "Skipping empty document");
            return Ok(0);
        }

        let chunks = self.chunker.chunk(text);
        let count = chunks.len();

        for chunk in chunks {
            let embedding = self.embedder.embed(&chunk).await?;
            let passage = match source {
                Some(src) => Passage::with_source(chunk, src),
                None => Passage::new(chunk),
            };
            self.index.insert(embedding, passage)?;
        }

        info!(
            source = source.unwrap_or("<unnamed>"),
            passages = count,
            "Document ingested"
        );
        Ok(count)
    }

    /// Total passages in the underlying index.
    pub fn indexed_passages(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::MockEmbedding;

    fn make_pipeline() -> IngestPipeline<MockEmbedding> {
        let embedder = MockEmbedding::new();
        let index = Arc::new(FlatIndex::new(embedder.dimensions()));
        IngestPipeline::new(index, embedder, Chunker::new(50, 10))
    }

    #[tokio::test]
    async fn test_ingest_splits_and_inserts() {
        let pipeline = make_pipeline();
        let text = "sentence ".repeat(30);
        let count = pipeline.ingest_document(&text, Some("test.txt")).await.unwrap();
        assert!(count > 1);
        assert_eq!(pipeline.indexed_passages(), count);
    }

    #[tokio::test]
    async fn test_ingest_empty_document_is_noop() {
        let pipeline = make_pipeline();
        let count = pipeline.ingest_document("   \n  ", None).await.unwrap();
        assert_eq!(count, 0);
        assert_eq!(pipeline.indexed_passages(), 0);
    }

    #[tokio::test]
    async fn test_ingest_attaches_source() {
        let pipeline = make_pipeline();
        pipeline
            .ingest_document("short document", Some("eiffel.txt"))
            .await
            .unwrap();

        let embedder = MockEmbedding::new();
        let v = embedder.embed("short document").await.unwrap();
        let hits = pipeline.index.search(&v, 1).unwrap();
        assert_eq!(hits[0].passage.source.as_deref(), Some("eiffel.txt"));
    }

    #[tokio::test]
    async fn test_ingest_multiple_documents_accumulate() {
        let pipeline = make_pipeline();
        pipeline.ingest_document("first doc", None).await.unwrap();
        pipeline.ingest_document("second doc", None).await.unwrap();
        assert_eq!(pipeline.indexed_passages(), 2);
    }
}
