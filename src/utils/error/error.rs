//! Error handling for the Gateway
//!
//! This module defines all error types used throughout the gateway.

#![allow(missing_docs)]

use crate::core::providers::ProviderError;
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

const PROVIDER_FAILURE_MESSAGE: &str = "AI provider request failed";

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid caller input (bad prompt, malformed body)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad, expired or malformed credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limiting errors
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        retry_after_secs: Option<u64>,
    },

    /// A required collaborator is not configured
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Upstream AI provider failures
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// HTTP status and machine-readable code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::Validation(_) => (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT"),
            GatewayError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            GatewayError::RateLimit { .. } => {
                (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMIT_EXCEEDED")
            }
            GatewayError::Unavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "SERVICE_UNAVAILABLE")
            }
            GatewayError::Provider(_) => (StatusCode::BAD_GATEWAY, "PROVIDER_ERROR"),
            GatewayError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Message shown to the caller
    ///
    /// Internal details are never echoed back; the full error is logged instead.
    pub fn public_message(&self) -> String {
        match self {
            GatewayError::Validation(message)
            | GatewayError::Unauthorized(message)
            | GatewayError::Unavailable(message) => message.clone(),
            GatewayError::RateLimit { message, .. } => message.clone(),
            GatewayError::Provider(_) => PROVIDER_FAILURE_MESSAGE.to_string(),
            _ => "An internal error occurred".to_string(),
        }
    }
}

impl GatewayError {
    /// Build the JSON error response, tagging it with `request_id` when known
    pub fn error_response_with_request_id(&self, request_id: Option<String>) -> HttpResponse {
        let (status_code, error_code) = self.status_and_code();

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message: self.public_message(),
                timestamp: chrono::Utc::now().timestamp(),
                request_id,
            },
        };

        let mut builder = HttpResponse::build(status_code);
        match self {
            GatewayError::Unauthorized(_) => {
                builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
            }
            GatewayError::RateLimit {
                retry_after_secs: Some(secs),
                ..
            } => {
                builder.insert_header((header::RETRY_AFTER, secs.to_string()));
            }
            _ => {}
        }

        builder.json(error_response)
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        // RequestIdMiddleware rebuilds the body with the request id filled in
        self.error_response_with_request_id(None)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn rate_limit<S: Into<String>>(message: S, retry_after_secs: Option<u64>) -> Self {
        Self::RateLimit {
            message: message.into(),
            retry_after_secs,
        }
    }

    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
