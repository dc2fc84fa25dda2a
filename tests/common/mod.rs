//! Common test utilities for chat-gateway

pub mod fixtures;
pub mod platforms;

pub use fixtures::{bearer, test_config, test_state};
pub use platforms::ScriptedPlatform;
