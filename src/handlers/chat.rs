// src/handlers/chat.rs
use crate::error::ApiError;
use crate::models::chat::{ChatReply, ChatRequest};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Extension},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

pub fn chat_routes() -> Router {
    Router::new().route("/api/chat", post(chat_handler))
}

/// `POST /api/chat`: 400 for a missing message, otherwise always 200.
async fn chat_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable chat body");
            ChatRequest::default()
        }
    };

    let message = request.text().ok_or(ApiError::MissingMessage)?;

    let reply = state.agent.respond(message).await;
    tracing::info!(
        source = ?reply.source,
        message_chars = message.chars().count(),
        reply_chars = reply.reply.chars().count(),
        "💬 chat reply"
    );

    Ok(Json(reply))
}
