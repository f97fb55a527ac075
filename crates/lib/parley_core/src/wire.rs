//! Request and response bodies for `POST /api/chat`.

use serde::{Deserialize, Serialize};

/// Route served by the proxy and called by the widget.
pub const CHAT_ROUTE: &str = "/api/chat";

/// Body of a 400 response.
pub const PROMPT_REQUIRED: &str = "Prompt is required";

/// Body of a 500 response. Upstream detail is never included.
pub const PROCESSING_FAILED: &str = "Error processing the request";

/// `{ "prompt": string }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
        }
    }

    /// The prompt, or `None` when it is absent or empty.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.is_empty())
    }
}

/// Either `{ "reply": string }` or `{ "error": string }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply { reply: String },
    Error { error: String },
}

impl ChatResponse {
    pub fn reply(text: impl Into<String>) -> Self {
        Self::Reply { reply: text.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}
