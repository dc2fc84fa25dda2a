//! Gemini Error Handling

use crate::core::providers::ProviderError;

const PROVIDER: &str = "gemini";

/// Maps Gemini HTTP failures to [`ProviderError`]
pub struct GeminiErrorMapper;

impl GeminiErrorMapper {
    /// Map a non-success HTTP status and body
    pub fn from_http_status(status: u16, body: &str, retry_after: Option<u64>) -> ProviderError {
        let message = Self::extract_message(body);
        match status {
            400 | 404 => ProviderError::invalid_request(PROVIDER, message),
            401 | 403 => ProviderError::authentication(PROVIDER, message),
            429 => ProviderError::RateLimit {
                provider: PROVIDER,
                message,
                retry_after,
            },
            _ => ProviderError::api_error(PROVIDER, status, message),
        }
    }

    /// Map a transport-level failure
    pub fn from_transport(err: &reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::timeout(PROVIDER, err.to_string())
        } else {
            ProviderError::network(PROVIDER, err.to_string())
        }
    }

    /// Pull `error.message` out of a Gemini error body, falling back to the raw body
    fn extract_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                json.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                if body.is_empty() {
                    "Unknown API error".to_string()
                } else {
                    body.to_string()
                }
            })
    }
}
