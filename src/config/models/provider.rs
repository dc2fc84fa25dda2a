//! AI provider configuration

use super::*;
use crate::core::providers::GeminiConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// AI provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Gemini backend settings
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// File whose contents are prepended to every prompt
    #[serde(default = "default_system_prompt_path")]
    pub system_prompt_path: PathBuf,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig::default(),
            system_prompt_path: default_system_prompt_path(),
        }
    }
}

impl ProviderConfig {
    /// Whether an API key has been supplied
    pub fn is_configured(&self) -> bool {
        !self.gemini.api_key.trim().is_empty()
    }

    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), String> {
        self.gemini.validate().map_err(|e| e.to_string())
    }
}
