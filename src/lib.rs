//! # Chat Gateway
//!
//! A minimal HTTP gateway in front of a generative-AI chat backend.
//!
//! ## Features
//!
//! - **Bearer tokens**: stateless, time-limited JWTs issued by `POST /token`
//! - **Rate limiting**: in-memory sliding window per caller identity
//! - **Gemini backend**: prompts forwarded to Google Gemini `generateContent`
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use chat_gateway::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

// Export core functionality
pub use core::gateway::{ChatGateway, ChatResponse};
pub use core::identity::UNAUTHENTICATED_USER;
pub use core::providers::{AiPlatform, GeminiConfig, GeminiProvider, ModelInfo, ProviderError};
pub use core::rate_limiter::RateLimiter;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
