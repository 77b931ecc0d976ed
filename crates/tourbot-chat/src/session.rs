//! Process-wide conversation session state.
//!
//! Owns the rolling history window and the set of passage texts already
//! surfaced to the user. One instance per process, held behind the
//! orchestrator's mutex; never persisted.

use std::collections::HashSet;

use tourbot_core::Turn;

use crate::types::TurnOutcome;

/// Conversation history plus the used-passage dedup set.
#[derive(Debug)]
pub struct SessionState {
    history: Vec<Turn>,
    used_passages: HashSet<String>,
    last_outcome: Option<TurnOutcome>,
    max_history_turns: usize,
}

impl SessionState {
    /// Create an empty session keeping at most `max_history_turns` turns.
    pub fn new(max_history_turns: usize) -> Self {
        Self {
            history: Vec::new(),
            used_passages: HashSet::new(),
            last_outcome: None,
            max_history_turns,
        }
    }

    /// The conversation so far, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Passage texts already surfaced in this session.
    pub fn used_passages(&self) -> &HashSet<String> {
        &self.used_passages
    }

    /// The most recent turn outcome, for display.
    pub fn last_outcome(&self) -> Option<&TurnOutcome> {
        self.last_outcome.as_ref()
    }

    /// Commit a completed turn: append the question/answer pair, record the
    /// passages that grounded it, and trim the history window.
    pub fn commit(&mut self, outcome: TurnOutcome, used_texts: impl IntoIterator<Item = String>) {
        self.history.push(Turn::user(outcome.question.clone()));
        self.history.push(Turn::assistant(outcome.answer.clone()));
        self.used_passages.extend(used_texts);

        if self.history.len() > self.max_history_turns {
            let excess = self.history.len() - self.max_history_turns;
            self.history.drain(..excess);
        }

        self.last_outcome = Some(outcome);
    }

    /// Clear history and used passages, returning the session to empty.
    pub fn reset(&mut self) {
        self.history.clear();
        self.used_passages.clear();
        self.last_outcome = None;
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty() && self.used_passages.is_empty()
    }
}
