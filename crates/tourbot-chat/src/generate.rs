//! Grounded answer generation.
//!
//! Builds the TourBot persona prompt, constrains the model to the retrieved
//! context, and maps completion failures to a fixed apology so a turn always
//! produces answer text.

use std::sync::Arc;

use tracing::warn;

use tourbot_core::Turn;
use tourbot_llm::{ChatMessage, LanguageModel};

/// Exact refusal sentence the persona must emit when the context does not
/// contain the answer.
pub const REFUSAL_SENTENCE: &str = "I'm sorry, I don't have information on that specific topic \
based on my current knowledge base.";

/// Fixed user-visible apology returned when the completion call fails.
pub const GENERATION_APOLOGY: &str = "Sorry, I encountered an error while generating the answer.";

const ANSWER_SYSTEM_PROMPT: &str = "You are a specialist travel assistant for France. Your name \
is 'TourBot'.\nYou MUST answer the user's question based ONLY on the provided context.\n\
- If the context contains the answer, provide it in a friendly and enthusiastic tone.\n\
- If the context does NOT contain the answer, you MUST say \"I'm sorry, I don't have information \
on that specific topic based on my current knowledge base.\"\n\
- DO NOT use any outside knowledge. DO NOT add any information that is not in the context.\n\
- Always refer to yourself as TourBot.";

/// Generates context-only answers in the TourBot persona.
pub struct AnswerGenerator {
    model: Arc<dyn LanguageModel>,
}

impl AnswerGenerator {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Generate an answer for `question` grounded in `context`.
    ///
    /// The full conversation history is replayed as prior messages so the
    /// model can keep its tone consistent; the context block and question
    /// form the final user message. Completion failures return
    /// [`GENERATION_APOLOGY`] instead of propagating.
    pub async fn generate(&self, question: &str, context: &str, history: &[Turn]) -> String {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(ANSWER_SYSTEM_PROMPT));
        messages.extend(history.iter().map(ChatMessage::from));
        messages.push(ChatMessage::user(format!(
            "CONTEXT:\n{}\n\nUSER'S QUESTION:\n{}",
            context, question
        )));

        match self.model.complete(&messages, 0.0).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "Answer generation failed; returning apology");
                GENERATION_APOLOGY.to_string()
            }
        }
    }
}
