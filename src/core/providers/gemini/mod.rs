//! Google Gemini Provider
//!
//! Google AI Studio `generateContent` backend for the chat gateway.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;

// Re-export main types
pub use client::GeminiClient;
pub use config::{DEFAULT_GEMINI_MODEL, GeminiConfig, SafetySetting};
pub use error::GeminiErrorMapper;
pub use provider::GeminiProvider;
