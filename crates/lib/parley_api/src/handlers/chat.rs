//! Chat request handler: relays one prompt to the completion service.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use parley_core::{ChatRequest, ChatResponse};
use tracing::{debug, error};

use crate::AppState;
use crate::error::{AppError, AppResult};

/// `POST /api/chat`: forward `prompt` upstream and return the trimmed reply.
///
/// Bodies not sent as `application/json`, bodies that are not JSON, and
/// bodies whose `prompt` is not a string are all treated as a missing prompt.
pub async fn chat_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<ChatResponse>> {
    let request: ChatRequest = if is_json(&headers) {
        serde_json::from_slice(&body).unwrap_or_else(|e| {
            debug!("Unreadable chat request body: {e}");
            ChatRequest::default()
        })
    } else {
        debug!("Chat request body is not application/json; ignoring it");
        ChatRequest::default()
    };
    let prompt = request.prompt().ok_or(AppError::MissingPrompt)?;

    debug!(prompt_len = prompt.len(), "forwarding prompt upstream");

    let text = state
        .completion
        .complete(prompt)
        .await
        .inspect_err(|e| error!("Error calling completion API: {e}"))?;

    Ok(Json(ChatResponse::reply(text.trim())))
}

/// `Content-Type: application/json`, with or without parameters.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
