use axum::{
    response::Html,
    routing::get,
    Router,
};
use std::path::Path;
use tower_http::services::ServeDir;

/// Storefront pages. Served from `static_dir` when it exists, otherwise a
/// built-in landing page at `/`.
pub fn ui_routes(static_dir: &Path) -> Router {
    if static_dir.is_dir() {
        tracing::info!("Serving static storefront from {}", static_dir.display());
        Router::new().fallback_service(ServeDir::new(static_dir))
    } else {
        tracing::warn!(
            "Static directory {} not found, serving built-in landing page",
            static_dir.display()
        );
        Router::new().route("/", get(landing_page))
    }
}

pub async fn landing_page() -> Html<&'static str> {
    Html(
        r###"<!DOCTYPE html>
<html lang="no">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>FRAM - ferske dagligvarer fra lokale gårder</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 720px; margin: 0 auto; padding: 2rem; line-height: 1.6; color: #1f2d1f; }
        h1 { color: #2f6b2f; }
        code { background: #eef3ea; padding: 0.15rem 0.35rem; border-radius: 3px; }
    </style>
</head>
<body>
    <h1>FRAM</h1>
    <p>Hjemlevering av sesongbaserte dagligvarer fra lokale samarbeidsgårder.</p>
    <p>Chat-API: <code>POST /api/chat</code> med <code>{"message": "Hva tilbyr dere?"}</code></p>
    <p>Status: <a href="/api/health">/api/health</a></p>
</body>
</html>"###,
    )
}
