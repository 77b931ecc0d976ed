//! Conversation orchestrator: the end-to-end turn pipeline.
//!
//! Each turn runs rewrite -> retrieve -> generate -> commit while holding
//! the session lock, so concurrent requests on the one process-wide session
//! serialize and the history/dedup state stays consistent.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error};

use tourbot_core::config::{ChatConfig, RetrievalConfig};
use tourbot_core::Turn;
use tourbot_index::VectorSearch;
use tourbot_llm::LanguageModel;

use crate::generate::AnswerGenerator;
use crate::retriever::Retriever;
use crate::rewrite::QueryRewriter;
use crate::session::SessionState;
use crate::types::TurnOutcome;

/// Composes the rewriter, retriever, and generator over one session.
///
/// The orchestrator itself never fails a turn: the rewriter and generator
/// degrade to fallback strings internally, and a retrieval failure degrades
/// to an empty context here.
pub struct ConversationOrchestrator {
    rewriter: QueryRewriter,
    retriever: Retriever,
    generator: AnswerGenerator,
    session: Mutex<SessionState>,
}

impl ConversationOrchestrator {
    /// Wire up the pipeline around the two external collaborators.
    pub fn new(
        model: Arc<dyn LanguageModel>,
        search: Arc<dyn VectorSearch>,
        retrieval: &RetrievalConfig,
        chat: &ChatConfig,
    ) -> Self {
        Self {
            rewriter: QueryRewriter::new(Arc::clone(&model)),
            retriever: Retriever::new(search, retrieval.candidate_k, retrieval.max_passages),
            generator: AnswerGenerator::new(model),
            session: Mutex::new(SessionState::new(chat.max_history_turns)),
        }
    }

    /// Process one conversation turn.
    ///
    /// Returns `None` for a blank question (no state change). Otherwise
    /// rewrites the question against the history, retrieves unseen passages,
    /// generates a grounded answer, and commits the exchange.
    pub async fn handle_turn(&self, raw_question: &str) -> Option<TurnOutcome> {
        let question = raw_question.trim();
        if question.is_empty() {
            return None;
        }

        let mut session = self.session.lock().await;

        let standalone = self.rewriter.rewrite(question, session.history()).await;
        debug!(standalone = %standalone, "Standalone question for retriever");

        let passages = match self
            .retriever
            .retrieve(&standalone, session.used_passages())
            .await
        {
            Ok(passages) => passages,
            Err(e) => {
                error!(error = %e, "Retrieval failed; answering with empty context");
                Vec::new()
            }
        };

        let context = passages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        // The generator sees the original question; the rewritten one is
        // only for retrieval.
        let answer = self
            .generator
            .generate(question, &context, session.history())
            .await;

        let outcome = TurnOutcome {
            question: question.to_string(),
            context,
            answer,
        };
        session.commit(outcome.clone(), passages.into_iter().map(|p| p.text));

        Some(outcome)
    }

    /// Clear the session: history and used passages, atomically.
    pub async fn reset(&self) {
        self.session.lock().await.reset();
    }

    /// Snapshot of the conversation so far.
    pub async fn history(&self) -> Vec<Turn> {
        self.session.lock().await.history().to_vec()
    }

    /// The most recent turn outcome, for display.
    pub async fn last_outcome(&self) -> Option<TurnOutcome> {
        self.session.lock().await.last_outcome().cloned()
    }
}
