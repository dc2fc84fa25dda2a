//! Application state shared across HTTP handlers

use crate::auth::{CredentialVerifier, JwtHandler, verifier_from_config};
use crate::config::Config;
use crate::core::gateway::ChatGateway;
use crate::core::prompts::load_system_prompt;
use crate::core::providers::{AiPlatform, GeminiProvider};
use crate::core::rate_limiter::RateLimiter;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc so cloning the state per worker is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Token issuance and verification
    pub jwt: Arc<JwtHandler>,
    /// Username/password check for `POST /token`
    pub credentials: Arc<dyn CredentialVerifier>,
    /// Chat orchestration
    pub gateway: Arc<ChatGateway>,
}

impl AppState {
    /// Create a new AppState from already-built components
    pub fn new(
        config: Config,
        jwt: JwtHandler,
        credentials: Arc<dyn CredentialVerifier>,
        gateway: ChatGateway,
    ) -> Self {
        Self {
            config: Arc::new(config),
            jwt: Arc::new(jwt),
            credentials,
            gateway: Arc::new(gateway),
        }
    }

    /// Build every component described by `config`
    pub async fn from_config(config: Config) -> Result<Self> {
        let jwt = JwtHandler::new(config.auth())?;
        let credentials = verifier_from_config(config.auth());

        let platform: Option<Arc<dyn AiPlatform>> = if config.provider().is_configured() {
            let provider = GeminiProvider::new(config.provider().gemini.clone())?;
            info!("Using Gemini model: {}", config.provider().gemini.model);
            Some(Arc::new(provider))
        } else {
            warn!("GEMINI_API_KEY is not set; chat requests will fail");
            None
        };

        let system_prompt = load_system_prompt(&config.provider().system_prompt_path).await;
        let limiter = Arc::new(RateLimiter::new(config.rate_limit().clone()));
        let gateway = ChatGateway::new(platform, limiter, system_prompt);

        Ok(Self::new(config, jwt, credentials, gateway))
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("jwt", &self.jwt)
            .field("gateway", &self.gateway)
            .finish_non_exhaustive()
    }
}
