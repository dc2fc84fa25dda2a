//! HTTP middleware implementations
//!
//! - Request ID tracking
//! - Caller identity extraction from bearer tokens

mod auth;
mod request_id;

// Re-export all middleware
pub use auth::{CallerIdentity, bearer_token};
pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware, RequestIdMiddlewareService};
