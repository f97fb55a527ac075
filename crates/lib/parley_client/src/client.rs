//! HTTP client for the proxy's chat endpoint.

use async_trait::async_trait;
use parley_core::wire::CHAT_ROUTE;
use parley_core::{ChatRequest, ChatResponse};
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::ClientError;

/// Server address used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Sends one prompt to the chat backend and returns its reply.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn send(&self, prompt: &str) -> Result<String, ClientError>;
}

/// [`ChatClient`] speaking the `/api/chat` JSON protocol over HTTP.
#[derive(Clone, Debug)]
pub struct HttpChatClient {
    client: Client,
    endpoint: String,
}

impl HttpChatClient {
    /// Client for the proxy at `server_url` (scheme, host and port).
    pub fn new(server_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{}", server_url.trim_end_matches('/'), CHAT_ROUTE),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn send(&self, prompt: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest::new(prompt))
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Response status");

        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), body = %body, "Server responded with an error");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(body = %body, "Response data");

        match serde_json::from_str::<ChatResponse>(&body)
            .map_err(|e| ClientError::Decode(e.to_string()))?
        {
            ChatResponse::Reply { reply } if !reply.is_empty() => Ok(reply),
            _ => Err(ClientError::MissingReply),
        }
    }
}
