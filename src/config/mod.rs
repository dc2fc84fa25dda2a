//! Configuration management for the Gateway
//!
//! Configuration is layered: built-in defaults, then an optional YAML file,
//! then environment variables. Command line flags are applied by the binary
//! on top of the result.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Config file read when no `--config` flag is given
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Main configuration struct for the Gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Parse configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let gateway: GatewayConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(Self { gateway })
    }

    /// Load and validate configuration from file and process environment
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok()).await
    }

    /// Load and validate configuration using `env` to look up variables
    ///
    /// A missing config file is not an error; defaults are used instead.
    pub async fn load_with_env<F>(path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = path.is_some();
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

        let mut config = match Self::from_file(path).await {
            Ok(config) => config,
            Err(GatewayError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                if explicit {
                    warn!("Config file {:?} not found, using defaults", path);
                } else {
                    debug!("No config file at {:?}, using defaults", path);
                }
                Self::default()
            }
            Err(GatewayError::Io(e)) => {
                return Err(GatewayError::Config(format!(
                    "Failed to read config file {:?}: {}",
                    path, e
                )));
            }
            Err(e) => return Err(e),
        };

        config.apply_env(env)?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Overlay environment variables onto the current values
    pub fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gateway = &mut self.gateway;

        if let Some(key) = env("GEMINI_API_KEY") {
            gateway.provider.gemini.api_key = key;
        }
        if let Some(model) = env("GEMINI_MODEL") {
            gateway.provider.gemini.model = model;
        }
        if let Some(path) = env("SYSTEM_PROMPT_PATH") {
            gateway.provider.system_prompt_path = path.into();
        }
        if let Some(secret) = env("JWT_SECRET_KEY") {
            gateway.auth.jwt_secret = secret;
        }
        if let Some(algorithm) = env("JWT_ALGORITHM") {
            gateway.auth.jwt_algorithm = algorithm;
        }
        if let Some(secs) = env("JWT_EXPIRATION_SECS") {
            gateway.auth.jwt_expiration = parse_env("JWT_EXPIRATION_SECS", &secs)?;
        }
        if let Some(host) = env("GATEWAY_HOST") {
            gateway.server.host = host;
        }
        if let Some(port) = env("GATEWAY_PORT") {
            gateway.server.port = parse_env("GATEWAY_PORT", &port)?;
        }

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.gateway.auth
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.gateway.rate_limit
    }

    /// Get provider configuration
    pub fn provider(&self) -> &ProviderConfig {
        &self.gateway.provider
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(&self.gateway).map_err(GatewayError::Config)?;

        // Warn about insecure configurations
        warn_insecure_config(&self.gateway.auth);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| GatewayError::Config(format!("Invalid value for {}: '{}'", name, value)))
}
