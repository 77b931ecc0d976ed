//! Follow-up question rewriting.
//!
//! Turns a follow-up question plus recent conversation turns into a
//! standalone question the retriever can embed without any conversational
//! context.

use std::sync::Arc;

use tracing::warn;

use tourbot_core::Turn;
use tourbot_llm::{ChatMessage, LanguageModel};

const REWRITE_SYSTEM_PROMPT: &str = "Given a chat history and a follow-up question, rephrase the \
follow-up question to be a standalone question that can be understood without the chat history. \
Do NOT answer the question, just reformulate it.";

/// Rewrites follow-up questions into standalone ones via the language model.
pub struct QueryRewriter {
    model: Arc<dyn LanguageModel>,
}

impl QueryRewriter {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Rewrite `question` into a standalone question.
    ///
    /// With an empty history the question is already standalone and is
    /// returned unchanged without a model call. On any completion failure
    /// the original question is returned unchanged; availability over
    /// correctness.
    pub async fn rewrite(&self, question: &str, history: &[Turn]) -> String {
        if history.is_empty() {
            return question.to_string();
        }

        let history_str: String = history
            .iter()
            .map(|turn| format!("{}: {}\n", turn.role.label(), turn.text))
            .collect();
        let user_prompt = format!(
            "Chat History:\n---\n{}\n---\nFollow Up Input: {}",
            history_str, question
        );

        let messages = [
            ChatMessage::system(REWRITE_SYSTEM_PROMPT),
            ChatMessage::user(user_prompt),
        ];

        match self.model.complete(&messages, 0.0).await {
            Ok(standalone) => standalone,
            Err(e) => {
                warn!(error = %e, "Query rewrite failed; using original question");
                question.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tourbot_llm::CompletionError;

    /// Stub model that returns a fixed reply and counts invocations.
    struct ScriptedModel {
        reply: String,
        calls: AtomicUsize,
    }

    impl ScriptedModel {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl LanguageModel for ScriptedModel {
        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _temperature: f32,
        ) -> Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl LanguageModel for FailingModel {
        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _temperature: f32,
        ) -> Result<String, CompletionError> {
            Err(CompletionError::Transport("connection refused".to_string()))
        }
    }

    /// Stub that captures the messages it was asked to complete.
    struct CapturingModel {
        seen: std::sync::Mutex<Vec<ChatMessage>>,
    }

    #[async_trait]
    impl LanguageModel for CapturingModel {
        async fn complete(
            &self,
            messages: &[ChatMessage],
            _temperature: f32,
        ) -> Result<String, CompletionError> {
            *self.seen.lock().unwrap() = messages.to_vec();
            Ok("rewritten".to_string())
        }
    }

    #[tokio::test]
    async fn test_empty_history_returns_question_unchanged() {
        let model = Arc::new(ScriptedModel::new("should not be used"));
        let rewriter = QueryRewriter::new(model.clone());

        let result = rewriter.rewrite("What is the Eiffel Tower?", &[]).await;
        assert_eq!(result, "What is the Eiffel Tower?");
        // No model call was made.
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_with_history_returns_model_output() {
        let model = Arc::new(ScriptedModel::new("How tall is the Eiffel Tower?"));
        let rewriter = QueryRewriter::new(model.clone());
        let history = vec![
            Turn::user("What is the Eiffel Tower?"),
            Turn::assistant("A lattice tower in Paris."),
        ];

        let result = rewriter.rewrite("How tall is it?", &history).await;
        assert_eq!(result, "How tall is the Eiffel Tower?");
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_original_question() {
        let rewriter = QueryRewriter::new(Arc::new(FailingModel));
        let history = vec![Turn::user("earlier question")];

        let result = rewriter.rewrite("How tall is it?", &history).await;
        assert_eq!(result, "How tall is it?");
    }

    #[tokio::test]
    async fn test_prompt_contains_history_lines_and_question() {
        let model = Arc::new(CapturingModel {
            seen: std::sync::Mutex::new(Vec::new()),
        });
        let rewriter = QueryRewriter::new(model.clone());
        let history = vec![
            Turn::user("What is the Louvre?"),
            Turn::assistant("A museum in Paris."),
        ];

        rewriter.rewrite("Who built it?", &history).await;

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].role, "system");
        assert!(seen[0].content.contains("Do NOT answer the question"));
        assert_eq!(seen[1].role, "user");
        assert!(seen[1].content.contains("User: What is the Louvre?"));
        assert!(seen[1].content.contains("Assistant: A museum in Paris."));
        assert!(seen[1].content.contains("Follow Up Input: Who built it?"));
    }

    #[tokio::test]
    async fn test_prompt_history_block_delimited() {
        let model = Arc::new(CapturingModel {
            seen: std::sync::Mutex::new(Vec::new()),
        });
        let rewriter = QueryRewriter::new(model.clone());
        let history = vec![Turn::user("q"), Turn::assistant("a")];

        rewriter.rewrite("follow-up", &history).await;

        let seen = model.seen.lock().unwrap();
        // Each history line ends with a newline, so a blank line sits
        // between the last line and the closing delimiter.
        assert!(seen[1].content.starts_with("Chat History:\n---\n"));
        assert!(seen[1]
            .content
            .contains("Assistant: a\n\n---\nFollow Up Input: follow-up"));
    }
}
