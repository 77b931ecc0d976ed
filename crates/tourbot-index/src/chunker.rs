//! Recursive character text splitter.
//!
//! Splits documents on paragraph breaks first, then line breaks, then
//! spaces, and finally raw characters, merging the resulting pieces into
//! chunks of at most `chunk_size` characters with `chunk_overlap` characters
//! carried between consecutive chunks.

use tourbot_core::config::IngestConfig;

/// Separators tried in order, coarsest first.
const SEPARATORS: [&str; 3] = ["\n\n", "\n", " "];

/// Splits text into overlapping chunks for embedding.
#[derive(Debug, Clone)]
pub struct Chunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl Chunker {
    /// Create a chunker. `chunk_overlap` is clamped below `chunk_size`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            chunk_overlap: chunk_overlap.min(chunk_size - 1),
        }
    }

    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Split `text` into chunks. Whitespace-only chunks are dropped.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let pieces = split_with(text, &SEPARATORS, self.chunk_size);
        self.merge(pieces)
    }

    /// Merge atomic pieces into chunks, carrying an overlap tail between
    /// consecutive chunks.
    fn merge(&self, pieces: Vec<String>) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut current_len = 0usize;

        for piece in pieces {
            let piece_len = piece.chars().count();

            if current_len + piece_len > self.chunk_size && !current.is_empty() {
                push_chunk(&mut chunks, &current);

                // Keep an overlap tail, and make room for the incoming piece.
                while current_len > self.chunk_overlap
                    || (current_len + piece_len > self.chunk_size && !current.is_empty())
                {
                    if current.is_empty() {
                        break;
                    }
                    let removed = current.remove(0);
                    current_len -= removed.chars().count();
                }
            }

            current_len += piece_len;
            current.push(piece);
        }

        push_chunk(&mut chunks, &current);
        chunks
    }
}

fn push_chunk(chunks: &mut Vec<String>, pieces: &[String]) {
    let joined = pieces.concat();
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

/// Recursively split text into pieces no longer than `chunk_size` characters,
/// keeping each separator attached to the piece that precedes it.
fn split_with(text: &str, separators: &[&str], chunk_size: usize) -> Vec<String> {
    if text.chars().count() <= chunk_size {
        return vec![text.to_string()];
    }

    match separators.first() {
        Some(sep) => {
            let mut out = Vec::new();
            for part in text.split_inclusive(sep) {
                if part.chars().count() <= chunk_size {
                    out.push(part.to_string());
                } else {
                    out.extend(split_with(part, &separators[1..], chunk_size));
                }
            }
            out
        }
        None => {
            // No separator left: hard split on character boundaries.
            let chars: Vec<char> = text.chars().collect();
            chars
                .chunks(chunk_size)
                .map(|window| window.iter().collect())
                .collect()
        }
    }
}
