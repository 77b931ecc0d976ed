//! Vector index and embedding collaborators for TourBot.
//!
//! Provides the [`VectorSearch`] trait consumed by the conversation core,
//! a brute-force cosine [`FlatIndex`] with JSON snapshot persistence, the
//! [`EmbeddingService`] trait with HTTP and mock implementations, and the
//! chunking/ingestion pipeline that builds the corpus offline.

pub mod chunker;
pub mod embedding;
pub mod error;
pub mod index;
pub mod pipeline;
pub mod search;

pub use chunker::Chunker;
pub use embedding::{EmbeddingService, HttpEmbeddingService, MockEmbedding};
pub use error::IndexError;
pub use index::{FlatIndex, ScoredPassage};
pub use pipeline::IngestPipeline;
pub use search::{SemanticSearcher, VectorSearch};
