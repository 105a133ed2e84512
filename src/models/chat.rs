// src/models/chat.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`. `message` stays a raw JSON value so that a
/// number or `null` is reported as a missing message rather than a parse error.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl ChatRequest {
    /// The message text, if present and not blank.
    pub fn text(&self) -> Option<&str> {
        match &self.message {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Which branch of the decision policy produced a reply. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplySource {
    #[serde(rename = "rule:offer")]
    RuleOffer,
    #[serde(rename = "rule:farms")]
    RuleFarms,
    #[serde(rename = "openai")]
    Model,
    #[serde(rename = "safety-fallback")]
    SafetyFallback,
    #[serde(rename = "fallback")]
    ErrorFallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(rename = "debugSource")]
    pub source: ReplySource,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>, source: ReplySource) -> Self {
        Self {
            reply: reply.into(),
            source,
        }
    }
}

/// `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub ok: bool,
    pub knowledge_file: String,
    pub knowledge_length: usize,
    pub has_braastad: bool,
    pub has_oppdalslinna: bool,
    pub has_api_key: bool,
}

/// `GET /api/ai-test`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProbeResult {
    Success { ok: bool, reply: String },
    Failure { ok: bool, error: String, status: u16 },
}
