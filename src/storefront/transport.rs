use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/chat";

/// Banner text when the endpoint gives no message of its own.
pub const UNAVAILABLE_MESSAGE: &str = "Chat er midlertidig utilgjengelig. Prøv igjen senere.";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered, but not with a success status.
    #[error("{message}")]
    Status { status: u16, message: String },
}

/// How the chat widget reaches the chat endpoint.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one message, get back the reply text (possibly empty).
    async fn send(&self, message: &str) -> Result<String, TransportError>;
}

#[derive(Debug, Default, Deserialize)]
struct EndpointBody {
    #[serde(default)]
    reply: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpChatTransport {
    client: Client,
    api_url: String,
    timeout: Duration,
}

impl HttpChatTransport {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, message: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .post(&self.api_url)
            .timeout(self.timeout)
            .json(&json!({ "message": message }))
            .send()
            .await?;

        let status = response.status();
        // Error responses are JSON too, so parse regardless of status
        let body: EndpointBody = response.json().await.unwrap_or_default();

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: body.message.unwrap_or_else(|| UNAVAILABLE_MESSAGE.to_string()),
            });
        }

        Ok(body.reply.unwrap_or_default())
    }
}
