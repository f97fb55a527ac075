//! OpenAI completion provider.
//!
//! Calls the chat completions API (`/v1/chat/completions`) once per prompt,
//! sending the prompt as a single user-role message. No retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CompletionClient, CompletionError, CompletionParams};
use crate::credentials::ApiKey;

/// Base URL of the hosted API.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [RequestMessage<'a>; 1],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Completion client for OpenAI-compatible chat completion endpoints.
#[derive(Clone, Debug)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
    params: CompletionParams,
}

impl OpenAiClient {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            client: Client::new(),
            base_url: OPENAI_API_BASE.to_string(),
            api_key,
            params: CompletionParams::default(),
        }
    }

    /// Point the client at a different API base (e.g. a local stand-in).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn params(&self) -> &CompletionParams {
        &self.params
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest {
            model: &self.params.model,
            messages: [RequestMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::Decode(e.to_string()))?;
        debug!(model = %self.params.model, choices = parsed.choices.len(), "completion received");

        parsed
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyChoices)?
            .message
            .content
            .ok_or(CompletionError::MissingContent)
    }
}
