//! # parley_api
//!
//! HTTP API library for Parley: a single `POST /api/chat` route that proxies
//! prompts to the completion service.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use parley_core::CompletionClient;
use parley_core::completion::OpenAiClient;
use parley_core::wire::CHAT_ROUTE;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::chat;

/// Shared application state passed to all handlers.
///
/// Read-only after construction; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Upstream completion service.
    pub completion: Arc<dyn CompletionClient>,
}

impl AppState {
    /// State backed by the hosted OpenAI API, authenticated with the
    /// configured key.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::with_client(Arc::new(OpenAiClient::new(config.api_key.clone())))
    }

    pub fn with_client(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(CHAT_ROUTE, post(chat::chat_handler))
        .layer(cors)
        .with_state(state)
}
