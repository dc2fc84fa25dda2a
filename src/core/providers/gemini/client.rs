//! Gemini Client
//!
//! Thin HTTP client for the Google AI Studio `generateContent` endpoint.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Client, ClientBuilder};
use tracing::debug;

use crate::core::providers::ProviderError;

use super::config::GeminiConfig;
use super::error::GeminiErrorMapper;
use super::models::{GenerateContentRequest, GenerateContentResponse};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    /// Create a client from validated configuration
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        config.validate()?;

        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| {
                ProviderError::configuration("gemini", format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Configured model name
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send a single-turn prompt
    pub async fn generate_content(
        &self,
        prompt: &str,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = self.config.generate_content_url();
        let body = GenerateContentRequest::from_prompt(prompt, &self.config.safety_settings);

        debug!(model = %self.config.model, "sending Gemini generateContent request");

        let response = self
            .http_client
            .post(&url)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiErrorMapper::from_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeminiErrorMapper::from_http_status(
                status.as_u16(),
                &error_text,
                retry_after,
            ));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| GeminiErrorMapper::from_transport(&e))?;

        serde_json::from_str(&response_text).map_err(|e| {
            ProviderError::response_parsing("gemini", format!("Failed to parse response JSON: {}", e))
        })
    }

    fn build_headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(&self.config.api_key).map_err(|e| {
                ProviderError::authentication("gemini", format!("Invalid API key format: {}", e))
            })?,
        );
        Ok(headers)
    }
}
