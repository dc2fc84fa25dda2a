//! Configuration validation

use super::models::*;
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.auth
            .validate()
            .map_err(|e| format!("Auth config error: {}", e))?;
        self.rate_limit
            .validate()
            .map_err(|e| format!("Rate limit config error: {}", e))?;
        self.provider
            .validate()
            .map_err(|e| format!("Provider config error: {}", e))?;

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}
