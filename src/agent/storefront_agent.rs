// Chat decision policy for the storefront assistant.
// Canned rules first, then one knowledge-grounded model call, with a
// safety check on the output and a fallback for any upstream failure.

use crate::agent::{canned, intent, prompt, safety};
use crate::knowledge::KnowledgeDocument;
use crate::models::chat::{ChatReply, ReplySource};
use crate::openai_client::{ChatModel, CompletionRequest, LlmError};
use std::sync::Arc;

#[derive(Clone)]
pub struct StorefrontAgent {
    model: Arc<dyn ChatModel>,
    system_prompt: Arc<str>,
}

impl StorefrontAgent {
    pub fn new(model: Arc<dyn ChatModel>, knowledge: &KnowledgeDocument) -> Self {
        Self {
            model,
            system_prompt: prompt::system_prompt(knowledge).into(),
        }
    }

    /// Answer one message. Never fails: every upstream problem becomes a
    /// fallback reply. Callers reject blank input before getting here.
    pub async fn respond(&self, message: &str) -> ChatReply {
        match intent::classify(message) {
            intent::Intent::Offer => ChatReply::new(canned::OFFER_ANSWER, ReplySource::RuleOffer),
            intent::Intent::Farms => ChatReply::new(canned::FARMS_ANSWER, ReplySource::RuleFarms),
            intent::Intent::General => self.ask_model(message).await,
        }
    }

    async fn ask_model(&self, message: &str) -> ChatReply {
        let request = CompletionRequest {
            system: Some(self.system_prompt.to_string()),
            user: message.to_string(),
            temperature: prompt::CHAT_TEMPERATURE,
            max_output_tokens: prompt::CHAT_MAX_OUTPUT_TOKENS,
        };

        match self.model.complete(request).await {
            Ok(reply) if safety::is_acceptable(&reply) => ChatReply::new(reply, ReplySource::Model),
            Ok(reply) => {
                tracing::info!(
                    empty = reply.trim().is_empty(),
                    term = safety::transit_term(&reply).unwrap_or(""),
                    "model reply rejected by safety check"
                );
                ChatReply::new(canned::safety_fallback(), ReplySource::SafetyFallback)
            }
            Err(e) => {
                tracing::error!(
                    status = ?e.status(),
                    message = %e.message(),
                    "OpenAI call failed in chat"
                );
                ChatReply::new(canned::error_fallback(), ReplySource::ErrorFallback)
            }
        }
    }

    /// Connectivity check used by `/api/ai-test`.
    pub async fn probe(&self) -> Result<String, LlmError> {
        self.model
            .complete(CompletionRequest {
                system: None,
                user: prompt::PROBE_INPUT.to_string(),
                temperature: 0.0,
                max_output_tokens: prompt::PROBE_MAX_OUTPUT_TOKENS,
            })
            .await
    }
}
