//! Gemini Configuration Module

use serde::{Deserialize, Serialize};

use crate::core::providers::ProviderError;

/// Default model used when none is configured
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Google AI Studio endpoint
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (Google AI Studio)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL, overridable for proxies and tests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Safety settings sent with every request
    #[serde(default = "default_safety_settings")]
    pub safety_settings: Vec<SafetySetting>,
}

/// A single Gemini safety setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_safety_settings() -> Vec<SafetySetting> {
    vec![SafetySetting {
        category: "HARM_CATEGORY_HATE_SPEECH".to_string(),
        threshold: "BLOCK_ONLY_HIGH".to_string(),
    }]
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            safety_settings: default_safety_settings(),
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("safety_settings", &self.safety_settings)
            .finish()
    }
}

impl GeminiConfig {
    /// Create a Google AI Studio configuration with defaults
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Build the `generateContent` endpoint URL for the configured model
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::configuration(
                "gemini",
                "GEMINI_API_KEY environment variable must be set.",
            ));
        }
        if self.model.trim().is_empty() {
            return Err(ProviderError::configuration(
                "gemini",
                "Model name is not set.",
            ));
        }
        if self.request_timeout == 0 {
            return Err(ProviderError::configuration(
                "gemini",
                "Request timeout must be greater than 0",
            ));
        }
        Ok(())
    }
}
