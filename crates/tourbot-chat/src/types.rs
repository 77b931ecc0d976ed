use serde::{Deserialize, Serialize};

/// The result of one processed conversation turn, for presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The user's question as asked (trimmed).
    pub question: String,
    /// The retrieved passages joined with blank lines; empty if nothing
    /// was retrieved.
    pub context: String,
    /// The generated (or fallback) answer text.
    pub answer: String,
}
