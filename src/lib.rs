// lib.rs - FRAM storefront: chat API, knowledge store and client-side state
pub mod agent;
pub mod config;
pub mod error;
pub mod handlers;
pub mod knowledge;
pub mod middleware;
pub mod models;
pub mod openai_client;
pub mod storefront;

use axum::{Extension, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use agent::storefront_agent::StorefrontAgent;
use knowledge::KnowledgeDocument;

// AppState holds the knowledge document and the chat agent; both are built once in main
pub struct AppState {
    pub knowledge: Arc<KnowledgeDocument>,
    pub agent: StorefrontAgent,
    pub has_api_key: bool,
}

impl AppState {
    pub fn new(knowledge: Arc<KnowledgeDocument>, agent: StorefrontAgent, has_api_key: bool) -> Self {
        Self {
            knowledge,
            agent,
            has_api_key,
        }
    }
}

/// Build the full application router: API routes, static site, logging and CORS.
pub fn app_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .merge(handlers::chat::chat_routes())
        .merge(handlers::health::health_routes())
        .merge(handlers::ui::ui_routes(static_dir))
        .layer(axum::middleware::from_fn(middleware::logging::request_logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
