use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::{DEFAULT_MODEL, DEFAULT_OPENAI_BASE_URL};

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,

    #[error("request to OpenAI failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenAI API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse OpenAI response: {0}")]
    Decode(String),
}

impl LlmError {
    /// Upstream HTTP status, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Api { status, .. } => Some(*status),
            LlmError::Transport(e) => e.status().map(|s| s.as_u16()),
            LlmError::MissingApiKey | LlmError::Decode(_) => None,
        }
    }

    /// Human-readable message without the status prefix.
    pub fn message(&self) -> String {
        match self {
            LlmError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// One outbound completion: an optional system instruction and one user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: Option<String>,
    pub user: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Anything that can answer a [`CompletionRequest`] with plain text.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}

// Responses API wire types

#[derive(Debug, Serialize)]
struct ResponsesRequest {
    model: String,
    input: Vec<InputMessage>,
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct InputMessage {
    role: &'static str,
    content: Vec<InputContent>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum InputContent {
    #[serde(rename = "input_text")]
    InputText { text: String },
}

#[derive(Debug, Deserialize)]
pub struct ResponsesResponse {
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
pub struct OutputItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
pub struct OutputContent {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl ResponsesResponse {
    /// Concatenate every `output_text` part of every message item.
    pub fn output_text(&self) -> String {
        self.output
            .iter()
            .filter(|item| item.item_type == "message")
            .flat_map(|item| item.content.iter())
            .filter(|c| c.content_type == "output_text")
            .filter_map(|c| c.text.as_deref())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(20),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_request(&self, request: CompletionRequest) -> ResponsesRequest {
        let mut input = Vec::with_capacity(2);
        if let Some(system) = request.system {
            input.push(InputMessage {
                role: "system",
                content: vec![InputContent::InputText { text: system }],
            });
        }
        input.push(InputMessage {
            role: "user",
            content: vec![InputContent::InputText { text: request.user }],
        });

        ResponsesRequest {
            model: self.model.clone(),
            input,
            temperature: request.temperature,
            max_output_tokens: request.max_output_tokens,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;
        let body = self.build_request(request);

        tracing::debug!(model = %body.model, messages = body.input.len(), "OpenAI Responses request");

        // Single attempt, no retries: a failure goes straight to the caller's fallback
        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&response_text)
                .map(|e| e.error.message)
                .unwrap_or(response_text);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ResponsesResponse =
            serde_json::from_str(&response_text).map_err(|e| LlmError::Decode(e.to_string()))?;

        Ok(parsed.output_text())
    }
}
