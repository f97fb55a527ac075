//! # parley_client
//!
//! Front-end side of Parley: the chat widget state machine, the HTTP client
//! for the proxy endpoint, and the session that ties the two together.
//!
//! The widget owns the transcript. Replies only reach it through the
//! session's reply channel, and renderers read it without mutating.

pub mod client;
pub mod error;
pub mod session;
pub mod widget;

pub use client::{ChatClient, HttpChatClient};
pub use error::ClientError;
pub use session::ChatSession;
pub use widget::{ChatWidget, InputEdit, PendingRequest, ReplyEvent, RequestId};
