//! In-memory vector index with brute-force cosine similarity search.
//!
//! All operations are O(n) for search, which is fine for a corpus of a few
//! hundred passages. The index persists to a JSON snapshot on disk and is
//! loaded whole at startup.

use std::path::Path;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::info;

use tourbot_core::Passage;

use crate::error::IndexError;

/// A passage returned from a vector search with its similarity score.
#[derive(Debug, Clone)]
pub struct ScoredPassage {
    pub passage: Passage,
    /// Cosine similarity score (-1.0 to 1.0; ~1.0 for near-identical text).
    pub score: f64,
}

/// An entry stored in the index: one passage and its embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndexEntry {
    embedding: Vec<f32>,
    passage: Passage,
}

/// On-disk snapshot format.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    dimensions: usize,
    entries: Vec<IndexEntry>,
}

/// In-memory vector index using brute-force cosine similarity.
///
/// Thread-safe via interior RwLock.
#[derive(Debug)]
pub struct FlatIndex {
    dimensions: usize,
    entries: RwLock<Vec<IndexEntry>>,
}

impl FlatIndex {
    /// Create a new empty index for vectors of the given dimensionality.
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Insert a passage with its embedding into the index.
    pub fn insert(&self, embedding: Vec<f32>, passage: Passage) -> Result<(), IndexError> {
        if embedding.len() != self.dimensions {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            });
        }
        let mut entries = self
            .entries
            .write()
            .map_err(|e| IndexError::Embedding(format!("lock poisoned: {}", e)))?;
        entries.push(IndexEntry { embedding, passage });
        Ok(())
    }

    /// Search for the k nearest passages to the query vector by cosine
    /// similarity. Returns results sorted by descending score.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredPassage>, IndexError> {
        if query.len() != self.dimensions {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            });
        }
        let entries = self
            .entries
            .read()
            .map_err(|e| IndexError::Embedding(format!("lock poisoned: {}", e)))?;

        let mut scored: Vec<ScoredPassage> = entries
            .iter()
            .map(|entry| ScoredPassage {
                passage: entry.passage.clone(),
                score: cosine_similarity(query, &entry.embedding),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        Ok(scored)
    }

    /// Return the number of passages currently stored in the index.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Return true if the index contains no passages.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Vector dimensionality this index accepts.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Write the index to a JSON snapshot file.
    pub fn save(&self, path: &Path) -> Result<(), IndexError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| IndexError::Snapshot(format!("lock poisoned: {}", e)))?;
        let snapshot = Snapshot {
            dimensions: self.dimensions,
            entries: entries.clone(),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        serde_json::to_writer(std::io::BufWriter::new(file), &snapshot)?;
        info!(passages = entries.len(), "Index snapshot saved to {}", path.display());
        Ok(())
    }

    /// Load an index from a JSON snapshot file.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let file = std::fs::File::open(path)?;
        let snapshot: Snapshot = serde_json::from_reader(std::io::BufReader::new(file))?;
        for entry in &snapshot.entries {
            if entry.embedding.len() != snapshot.dimensions {
                return Err(IndexError::Snapshot(format!(
                    "entry dimensionality {} does not match snapshot header {}",
                    entry.embedding.len(),
                    snapshot.dimensions
                )));
            }
        }
        info!(
            passages = snapshot.entries.len(),
            "Index snapshot loaded from {}",
            path.display()
        );
        Ok(Self {
            dimensions: snapshot.dimensions,
            entries: RwLock::new(snapshot.entries),
        })
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum();

    let mag_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}
