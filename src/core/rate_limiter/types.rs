//! Rate limiter types and data structures

/// Outcome of an admitted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    /// Maximum requests allowed in the window
    pub limit: u32,
    /// Requests recorded in the window, including this one
    pub current_count: u32,
    /// Remaining requests in the window
    pub remaining: u32,
}

impl RateLimitResult {
    /// Result reported when rate limiting is disabled
    pub(super) fn unlimited(limit: u32) -> Self {
        Self {
            limit,
            current_count: 0,
            remaining: limit,
        }
    }
}
