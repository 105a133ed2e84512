// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the server before it starts listening.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("knowledge file not found at {}", .0.display())]
    KnowledgeMissing(PathBuf),

    #[error("failed to read knowledge file {}: {source}", .path.display())]
    KnowledgeUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors a chat API handler can return to the caller.
///
/// Upstream model failures are never represented here; the agent turns them
/// into fallback replies before the handler sees them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing message")]
    MissingMessage,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingMessage => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
