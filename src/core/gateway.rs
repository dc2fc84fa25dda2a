//! Chat request orchestration
//!
//! [`ChatGateway`] validates the prompt, resolves the caller's rate-limit
//! bucket and forwards the prompt to the configured [`AiPlatform`].

use crate::core::identity::normalize_identity;
use crate::core::providers::{AiPlatform, ModelInfo};
use crate::core::rate_limiter::RateLimiter;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Longest accepted prompt, in characters
pub const MAX_PROMPT_CHARS: usize = 1000;

/// Returned when the model produces no text
pub const FALLBACK_RESPONSE: &str =
    "I'm sorry, I couldn't generate a response. Please try again later.";

const PLATFORM_UNAVAILABLE: &str = "AI platform is not configured properly.";

/// Body of a successful `/chat` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Orchestrates a single chat exchange
#[derive(Clone)]
pub struct ChatGateway {
    platform: Option<Arc<dyn AiPlatform>>,
    limiter: Arc<RateLimiter>,
    system_prompt: Option<String>,
}

impl ChatGateway {
    /// Create a gateway; `platform` is `None` when no backend is configured
    pub fn new(
        platform: Option<Arc<dyn AiPlatform>>,
        limiter: Arc<RateLimiter>,
        system_prompt: Option<String>,
    ) -> Self {
        Self {
            platform,
            limiter,
            system_prompt,
        }
    }

    /// Rate limiter consulted before every chat call
    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    /// Handle one chat request on behalf of `identity`
    pub async fn handle_chat(&self, prompt: &str, identity: Option<&str>) -> Result<ChatResponse> {
        if prompt.trim().is_empty() {
            return Err(GatewayError::validation("Prompt cannot be empty."));
        }
        if prompt.chars().count() > MAX_PROMPT_CHARS {
            return Err(GatewayError::validation(format!(
                "Prompt exceeds the maximum length of {} characters.",
                MAX_PROMPT_CHARS
            )));
        }

        let platform = self
            .platform
            .as_ref()
            .ok_or_else(|| GatewayError::unavailable(PLATFORM_UNAVAILABLE))?;

        let identity = normalize_identity(identity);
        self.limiter.check_and_record(identity)?;

        let full_prompt = match &self.system_prompt {
            Some(system) => format!("{}\n\n{}", system, prompt),
            None => prompt.to_string(),
        };

        info!("Forwarding chat request for user: {}", identity);
        let text = platform.chat(&full_prompt).await.map_err(|e| {
            error!("AI platform call failed for {}: {}", identity, e);
            GatewayError::from(e)
        })?;

        let response = match text {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                debug!("Empty model response for {}, using fallback", identity);
                FALLBACK_RESPONSE.to_string()
            }
        };

        Ok(ChatResponse { response })
    }

    /// Describe the configured model
    pub fn model_info(&self) -> Result<ModelInfo> {
        self.platform
            .as_ref()
            .map(|platform| platform.model_info())
            .ok_or_else(|| GatewayError::unavailable(PLATFORM_UNAVAILABLE))
    }
}

impl std::fmt::Debug for ChatGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatGateway")
            .field("configured", &self.platform.is_some())
            .field("limiter", &self.limiter)
            .field("system_prompt", &self.system_prompt.is_some())
            .finish()
    }
}
