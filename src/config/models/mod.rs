//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod auth;
pub mod gateway;
pub mod provider;
pub mod rate_limit;
pub mod server;

// Re-export all configuration types
pub use auth::*;
pub use gateway::*;
pub use provider::*;
pub use rate_limit::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default client request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    64 * 1024 // 64KB
}

/// Default system prompt location
pub fn default_system_prompt_path() -> std::path::PathBuf {
    std::path::PathBuf::from("src/prompts/system_prompt.md")
}
