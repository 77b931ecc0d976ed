//! Deduplicated passage retrieval.
//!
//! Wraps the vector search collaborator and filters out passages already
//! surfaced in the session, so each turn grounds on fresh material.

use std::collections::HashSet;
use std::sync::Arc;

use tourbot_core::Passage;
use tourbot_index::{IndexError, VectorSearch};

/// Retrieves the top unseen passages for a standalone question.
pub struct Retriever {
    search: Arc<dyn VectorSearch>,
    /// Candidates fetched from the index per query.
    candidate_k: usize,
    /// Unseen survivors kept for the answer context.
    max_passages: usize,
}

impl Retriever {
    pub fn new(search: Arc<dyn VectorSearch>, candidate_k: usize, max_passages: usize) -> Self {
        Self {
            search,
            candidate_k,
            max_passages,
        }
    }

    /// Fetch up to `candidate_k` candidates, drop any whose text is in
    /// `used`, and keep the first `max_passages` survivors in relevance
    /// order. Does not mutate `used`; the caller commits used passages
    /// after generation.
    pub async fn retrieve(
        &self,
        standalone_question: &str,
        used: &HashSet<String>,
    ) -> Result<Vec<Passage>, IndexError> {
        let candidates = self.search.query(standalone_question, self.candidate_k).await?;
        Ok(candidates
            .into_iter()
            .filter(|p| !used.contains(&p.text))
            .take(self.max_passages)
            .collect())
    }
}
