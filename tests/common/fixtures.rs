//! Test fixtures

use actix_web::http::header;
use actix_web::web;
use chat_gateway::auth::{JwtHandler, TestCredentialProvider};
use chat_gateway::core::gateway::ChatGateway;
use chat_gateway::server::AppState;
use chat_gateway::{AiPlatform, Config, GeminiConfig, RateLimiter};
use std::sync::Arc;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Configuration with a fixed secret and a placeholder API key
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.gateway.auth.jwt_secret = TEST_SECRET.to_string();
    config.gateway.provider.gemini = GeminiConfig::new("test-api-key");
    config
}

/// Application state around `platform` and the given system prompt
pub fn test_state(
    platform: Option<Arc<dyn AiPlatform>>,
    system_prompt: Option<&str>,
) -> web::Data<AppState> {
    let config = test_config();
    let jwt = JwtHandler::new(config.auth()).unwrap();
    let limiter = Arc::new(RateLimiter::new(config.rate_limit().clone()));
    let gateway = ChatGateway::new(platform, limiter, system_prompt.map(str::to_string));

    web::Data::new(AppState::new(
        config,
        jwt,
        Arc::new(TestCredentialProvider),
        gateway,
    ))
}

/// `Authorization` header for `token`
pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}
