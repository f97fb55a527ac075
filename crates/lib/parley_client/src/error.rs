//! Client error types.

use thiserror::Error;

/// Ways a round trip to the chat endpoint can fail.
///
/// The widget shows the same message for all of them; the variants exist
/// for the logs.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request to chat endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Chat endpoint responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Chat response parse error: {0}")]
    Decode(String),

    #[error("Chat response did not contain a reply")]
    MissingReply,
}
