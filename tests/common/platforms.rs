//! AI platform doubles

use async_trait::async_trait;
use chat_gateway::{AiPlatform, ModelInfo, ProviderError};
use std::sync::Mutex;

/// Replies with a fixed result and records every prompt it receives
pub struct ScriptedPlatform {
    reply: Result<Option<String>, ProviderError>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedPlatform {
    /// Platform that answers every prompt with `text`
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Ok(Some(text.to_string())))
    }

    /// Platform whose model produces no text
    pub fn silent() -> Self {
        Self::with_reply(Ok(None))
    }

    /// Platform whose calls fail with `err`
    pub fn failing(err: ProviderError) -> Self {
        Self::with_reply(Err(err))
    }

    fn with_reply(reply: Result<Option<String>, ProviderError>) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiPlatform for ScriptedPlatform {
    async fn chat(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_name: "scripted-model".to_string(),
            description: "Scripted test platform".to_string(),
        }
    }
}
