//! Integration tests for chat-gateway
//!
//! These tests drive the actix application end to end.

pub mod chat_api_tests;
pub mod gemini_provider_tests;
