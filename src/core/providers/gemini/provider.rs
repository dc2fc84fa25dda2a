//! Gemini implementation of [`AiPlatform`]

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::core::providers::{AiPlatform, ModelInfo, ProviderError};

use super::client::GeminiClient;
use super::config::GeminiConfig;

/// Google Gemini chat backend
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    /// Create a provider from configuration
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }
}

#[async_trait]
impl AiPlatform for GeminiProvider {
    async fn chat(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        let response = self.client.generate_content(prompt).await?;

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            warn!(block_reason = reason, "Gemini blocked the prompt");
        }

        let text = response.text();
        debug!(has_text = text.is_some(), "Gemini response received");
        Ok(text)
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_name: self.client.model().to_string(),
            description: "Gemini AI model for text generation".to_string(),
        }
    }
}
