//! AI provider capability
//!
//! The gateway talks to exactly one provider through the [`AiPlatform`] trait.
//! Implementations are injected into [`ChatGateway`](crate::core::gateway::ChatGateway)
//! so a different backend can be swapped in without touching request handling.

mod error;
pub mod gemini;

pub use error::ProviderError;
pub use gemini::{GeminiConfig, GeminiProvider};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Metadata describing the model behind a platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model identifier as sent to the provider
    pub model_name: String,
    /// Human-readable description
    pub description: String,
}

/// A generative chat backend
#[async_trait]
pub trait AiPlatform: Send + Sync {
    /// Send a prompt and return the generated text, if the model produced any
    async fn chat(&self, prompt: &str) -> Result<Option<String>, ProviderError>;

    /// Describe the model in use
    fn model_info(&self) -> ModelInfo;
}
