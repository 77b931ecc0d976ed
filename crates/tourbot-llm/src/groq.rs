//! OpenAI-compatible chat-completions client.
//!
//! Speaks the `POST {base}/chat/completions` protocol used by Groq, OpenAI,
//! and local servers such as LM Studio. Non-streaming only: the conversation
//! core consumes whole completions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tourbot_core::config::LlmConfig;

use crate::error::CompletionError;
use crate::provider::LanguageModel;
use crate::types::ChatMessage;

/// Chat-completion client for an OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct GroqClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    stream: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl GroqClient {
    /// Build a client from configuration, reading the API key from the
    /// environment variable the config names.
    pub fn from_config(config: &LlmConfig) -> Result<Self, CompletionError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| CompletionError::MissingApiKey(config.api_key_env.clone()))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            client,
        })
    }

    /// Build a client with an explicit key (used by tests and tools).
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }

    /// The model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LanguageModel for GroqClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = CompletionRequest {
            model: &self.model,
            messages,
            temperature,
            stream: false,
        };

        debug!(model = %self.model, messages = messages.len(), "Requesting completion");

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let payload: CompletionResponse = res
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let choice = payload
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::MalformedResponse("empty choices".to_string()))?;

        Ok(choice.message.content)
    }
}
