//! Completion module: single-turn text generation against a hosted LLM.
//!
//! # Public API
//!
//! - [`CompletionClient`]: the seam the proxy handler calls through
//! - [`openai::OpenAiClient`]: OpenAI chat completions implementation
//! - [`CompletionParams`]: fixed request parameters (model, token limit, temperature)

pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use openai::OpenAiClient;

/// Model requested for every completion.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Upper bound on generated tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 150;

/// Sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Errors that can occur while requesting a completion.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Completion API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Completion response parse error: {0}")]
    Decode(String),

    #[error("Completion response contained no choices")]
    EmptyChoices,

    #[error("Completion response contained no message content")]
    MissingContent,
}

/// Parameters sent with every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// A service that turns one user prompt into generated text.
///
/// Implementations return the raw generated text; callers decide how to
/// post-process it.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_fixed() {
        let params = CompletionParams::default();
        assert_eq!(params.model, "gpt-4");
        assert_eq!(params.max_tokens, 150);
        assert_eq!(params.temperature, 0.7);
    }

    #[test]
    fn status_error_carries_body() {
        let err = CompletionError::Status {
            status: 429,
            body: "quota exceeded".into(),
        };
        assert_eq!(err.to_string(), "Completion API returned 429: quota exceeded");
    }
}
