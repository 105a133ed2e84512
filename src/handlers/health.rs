// src/handlers/health.rs
use crate::models::chat::{HealthReport, ProbeResult};
use crate::AppState;
use axum::{
    extract::Extension,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn health_routes() -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/ai-test", get(ai_test))
}

/// Liveness and config probe. Depends only on startup state.
async fn health(Extension(state): Extension<Arc<AppState>>) -> Json<HealthReport> {
    let knowledge = &state.knowledge;
    Json(HealthReport {
        ok: true,
        knowledge_file: knowledge.path().display().to_string(),
        knowledge_length: knowledge.len(),
        has_braastad: knowledge.has_farm_name(),
        has_oppdalslinna: knowledge.has_farm_address(),
        has_api_key: state.has_api_key,
    })
}

/// One tiny model call; the upstream status is mirrored on failure.
async fn ai_test(Extension(state): Extension<Arc<AppState>>) -> (StatusCode, Json<ProbeResult>) {
    match state.agent.probe().await {
        Ok(reply) => (StatusCode::OK, Json(ProbeResult::Success { ok: true, reply })),
        Err(e) => {
            let status = e.status().unwrap_or(500);
            tracing::error!(status, message = %e.message(), "OpenAI ai-test failed");

            let http_status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                http_status,
                Json(ProbeResult::Failure {
                    ok: false,
                    error: e.message(),
                    status,
                }),
            )
        }
    }
}
