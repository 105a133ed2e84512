//! Tests over real sockets: the OpenAI client against local upstream stubs,
//! and the widget transport against the served chat API.

use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use fram_store::agent::storefront_agent::StorefrontAgent;
use fram_store::knowledge::KnowledgeDocument;
use fram_store::models::chat::ReplySource;
use fram_store::openai_client::{ChatModel, CompletionRequest, LlmError, OpenAiClient};
use fram_store::storefront::transport::{ChatTransport, HttpChatTransport, TransportError, UNAVAILABLE_MESSAGE};
use fram_store::storefront::widget::{ChatWidget, ScrollMetrics, UNAVAILABLE_BUBBLE};
use fram_store::{app_router, AppState};
use serde_json::json;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
async fn closed_port() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn knowledge() -> KnowledgeDocument {
    KnowledgeDocument::from_text("knowledge.txt", "Braastad Gaard, Oppdalslinna 242, 2740 Roa.")
}

fn client_for(upstream: SocketAddr) -> OpenAiClient {
    OpenAiClient::new(Some("sk-test".into()))
        .with_base_url(format!("http://{}/v1", upstream))
        .with_model("gpt-test")
}

/// Serve the full chat API in front of the given model client.
async fn serve_api(model: OpenAiClient) -> SocketAddr {
    let has_api_key = model.has_api_key();
    let knowledge = Arc::new(knowledge());
    let agent = StorefrontAgent::new(Arc::new(model), &knowledge);
    let state = Arc::new(AppState::new(knowledge, agent, has_api_key));
    serve(app_router(state, Path::new("/nonexistent/fram-static"))).await
}

fn general_question() -> CompletionRequest {
    CompletionRequest {
        system: None,
        user: "Hva er kapitalen i Norge?".into(),
        temperature: 0.2,
        max_output_tokens: 240,
    }
}

#[tokio::test]
async fn quota_error_body_is_parsed_into_api_error() {
    let upstream = serve(Router::new().route(
        "/v1/responses",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": { "message": "quota gone", "type": "insufficient_quota" } })),
            )
        }),
    ))
    .await;

    let err = client_for(upstream).complete(general_question()).await.unwrap_err();

    assert!(matches!(err, LlmError::Api { status: 429, .. }));
    assert_eq!(err.status(), Some(429));
    assert_eq!(err.message(), "quota gone");
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_message() {
    let upstream = serve(Router::new().route(
        "/v1/responses",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    ))
    .await;

    let err = client_for(upstream).complete(general_question()).await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert_eq!(err.message(), "upstream down");
}

#[tokio::test]
async fn hung_upstream_times_out_into_fallback() {
    let upstream = serve(Router::new().route(
        "/v1/responses",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "output": [] }))
        }),
    ))
    .await;

    let client = client_for(upstream).with_timeout(Duration::from_millis(300));
    let agent = StorefrontAgent::new(Arc::new(client), &knowledge());

    let started = Instant::now();
    let reply = agent.respond("Hva er kapitalen i Norge?").await;

    assert_eq!(reply.source, ReplySource::ErrorFallback);
    assert!(reply.reply.contains("demo-modus"));
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn model_reply_reaches_the_widget_transport() {
    let upstream = serve(Router::new().route(
        "/v1/responses",
        post(|headers: HeaderMap| async move {
            if headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some("Bearer sk-test") {
                return (StatusCode::UNAUTHORIZED, Json(json!({ "error": { "message": "bad key" } })));
            }
            (
                StatusCode::OK,
                Json(json!({
                    "output": [{
                        "type": "message",
                        "content": [{ "type": "output_text", "text": "Vi leverer i Roa og omegn." }]
                    }]
                })),
            )
        }),
    ))
    .await;
    let api = serve_api(client_for(upstream)).await;

    let transport = HttpChatTransport::new(format!("http://{}/api/chat", api));
    let reply = transport.send("Hvor leverer dere?").await.unwrap();

    assert_eq!(reply, "Vi leverer i Roa og omegn.");
}

#[tokio::test]
async fn unreachable_upstream_returns_fallback_over_http() {
    let api = serve_api(client_for(closed_port().await)).await;

    let transport = HttpChatTransport::new(format!("http://{}/api/chat", api));
    let reply = transport.send("Hva er kapitalen i Norge?").await.unwrap();

    assert!(reply.contains("demo-modus"));
    assert!(reply.contains("Vi tilbyr hjemlevering"));
}

#[tokio::test]
async fn missing_api_key_returns_fallback_over_http() {
    let api = serve_api(OpenAiClient::new(None).with_base_url(format!("http://{}/v1", closed_port().await))).await;

    let transport = HttpChatTransport::new(format!("http://{}/api/chat", api));
    let reply = transport.send("Hva er kapitalen i Norge?").await.unwrap();

    assert!(reply.contains("demo-modus"));
}

#[tokio::test]
async fn rejected_message_maps_to_unavailable_status() {
    let api = serve_api(client_for(closed_port().await)).await;

    let transport = HttpChatTransport::new(format!("http://{}/api/chat", api));
    let err = transport.send("   ").await.unwrap_err();

    match err {
        TransportError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, UNAVAILABLE_MESSAGE);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn endpoint_message_is_shown_in_banner() {
    let endpoint = serve(Router::new().route(
        "/api/chat",
        post(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "message": "Vedlikehold pågår" })),
            )
        }),
    ))
    .await;

    let transport = HttpChatTransport::new(format!("http://{}/api/chat", endpoint));
    let mut widget = ChatWidget::new();
    widget.send("Hei", ScrollMetrics::at_bottom(), &transport).await.unwrap();

    assert_eq!(widget.error_banner(), Some("Vedlikehold pågår"));
    assert_eq!(widget.transcript().last().unwrap().text, UNAVAILABLE_BUBBLE);
    assert!(!widget.is_busy());
}

#[tokio::test]
async fn unreachable_endpoint_raises_banner() {
    let transport = HttpChatTransport::new(format!("http://{}/api/chat", closed_port().await))
        .with_timeout(Duration::from_secs(2));
    let mut widget = ChatWidget::new();
    widget.send("Hei", ScrollMetrics::at_bottom(), &transport).await.unwrap();

    assert!(widget.error_banner().is_some());
    assert_eq!(widget.transcript().last().unwrap().text, UNAVAILABLE_BUBBLE);
}
