//! Server configuration, loaded from environment variables at startup.

use crate::error::StartupError;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Runtime configuration for the FRAM API.
///
/// Only the knowledge document is required. A missing `OPENAI_API_KEY` puts
/// the chat endpoint in demo mode: canned rules still answer, everything else
/// takes the fallback reply.
#[derive(Debug, Clone)]
pub struct Config {
    /// Knowledge document injected into every model prompt (`KNOWLEDGE_PATH`).
    pub knowledge_path: PathBuf,

    /// OpenAI credential (`OPENAI_API_KEY`), blank counts as absent.
    pub openai_api_key: Option<String>,

    /// Model name for the Responses API (`OPENAI_MODEL`).
    pub openai_model: String,

    /// API root, overridable for proxies (`OPENAI_BASE_URL`).
    pub openai_base_url: String,

    /// Deadline for one outbound model call (`OPENAI_TIMEOUT_SECS`).
    pub openai_timeout: Duration,

    /// Interface to bind (`BIND_HOST`).
    pub bind_host: String,

    /// TCP port (`PORT`).
    pub port: u16,

    /// Directory holding the static storefront pages (`STATIC_DIR`).
    pub static_dir: PathBuf,
}

impl Config {
    /// Build [`Config`] from the process environment.
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build [`Config`] from an arbitrary key lookup, validating as it goes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_or = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let port = parse_or(&lookup, "PORT", 3001u16)?;
        let timeout_secs = parse_or(&lookup, "OPENAI_TIMEOUT_SECS", 20u64)?;
        if timeout_secs == 0 {
            return Err(StartupError::InvalidConfig {
                key: "OPENAI_TIMEOUT_SECS",
                value: "0".to_owned(),
            });
        }

        let knowledge_path = PathBuf::from(value_or("KNOWLEDGE_PATH", "knowledge.txt"));
        if !knowledge_path.is_file() {
            return Err(StartupError::KnowledgeMissing(knowledge_path));
        }

        Ok(Self {
            knowledge_path,
            openai_api_key: lookup("OPENAI_API_KEY")
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty()),
            openai_model: value_or("OPENAI_MODEL", DEFAULT_MODEL),
            openai_base_url: value_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            openai_timeout: Duration::from_secs(timeout_secs),
            bind_host: value_or("BIND_HOST", "0.0.0.0"),
            port,
            static_dir: PathBuf::from(value_or("STATIC_DIR", "public")),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, StartupError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse()
            .map_err(|_| StartupError::InvalidConfig { key, value: raw }),
        None => Ok(default),
    }
}
