//! Core functionality for the Gateway
//!
//! This module contains the request-independent business logic: caller
//! identities, rate limiting, the AI provider capability and chat orchestration.

pub mod gateway;
pub mod identity;
pub mod prompts;
pub mod providers;
pub mod rate_limiter;

// Re-export commonly used types
pub use gateway::{ChatGateway, ChatResponse, FALLBACK_RESPONSE, MAX_PROMPT_CHARS};
pub use identity::UNAUTHENTICATED_USER;
pub use rate_limiter::{RateLimitResult, RateLimiter};
