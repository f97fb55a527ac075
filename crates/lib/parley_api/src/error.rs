//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use parley_core::wire::{PROCESSING_FAILED, PROMPT_REQUIRED};
use parley_core::{ChatResponse, CompletionError};
use thiserror::Error;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// The response body is always the fixed `{"error": ...}` message; the
/// upstream cause stays server-side.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Prompt is required")]
    MissingPrompt,

    #[error("Upstream completion failed: {0}")]
    Upstream(#[from] CompletionError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingPrompt => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::MissingPrompt => PROMPT_REQUIRED,
            AppError::Upstream(_) => PROCESSING_FAILED,
        };
        (self.status(), Json(ChatResponse::error(message))).into_response()
    }
}
