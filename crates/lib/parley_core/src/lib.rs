//! # parley_core
//!
//! Core domain types for Parley: the chat transcript model, the
//! `/api/chat` wire types, and the upstream completion client.

pub mod completion;
pub mod credentials;
pub mod message;
pub mod wire;

pub use completion::{CompletionClient, CompletionError, CompletionParams};
pub use credentials::ApiKey;
pub use message::{Message, Sender, Transcript};
pub use wire::{ChatRequest, ChatResponse};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
