//! Rate Limiting Implementation
//!
//! In-memory sliding window rate limiting keyed by caller identity

mod limiter;
mod types;


// Re-export public types
pub use limiter::RateLimiter;
pub use types::RateLimitResult;
