use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Request logging middleware: one line in, one line out, tagged with a request id.
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_owned())
        .unwrap_or_else(|| uri.path().to_owned());
    let origin = req
        .headers()
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        origin = %origin,
        "incoming request"
    );

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let duration_ms = whole_millis(start.elapsed());

    match status {
        500..=599 => tracing::error!(request_id = %request_id, method = %method, path = %path, status, duration_ms, "request completed (server error)"),
        400..=499 => tracing::warn!(request_id = %request_id, method = %method, path = %path, status, duration_ms, "request completed (client error)"),
        _ => tracing::info!(request_id = %request_id, method = %method, path = %path, status, duration_ms, "request completed"),
    }

    response
}

/// Milliseconds as `u64`, saturating instead of wrapping.
fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_millis_saturates_on_overflow() {
        assert_eq!(whole_millis(Duration::from_millis(1234)), 1234);
        assert_eq!(whole_millis(Duration::MAX), u64::MAX);
    }
}
