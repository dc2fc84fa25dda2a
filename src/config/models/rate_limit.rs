//! Rate limiting configuration

use serde::{Deserialize, Serialize};

/// Limit and window for one class of callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitPolicy {
    /// Maximum requests admitted per window
    pub limit: u32,
    /// Window length in seconds
    pub window_secs: u64,
}

impl RateLimitPolicy {
    pub const fn new(limit: u32, window_secs: u64) -> Self {
        Self { limit, window_secs }
    }

    /// Window length as a [`std::time::Duration`]
    pub fn window(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.window_secs)
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Policy shared by every unauthenticated caller as a single bucket
    #[serde(default = "default_anonymous_policy")]
    pub anonymous: RateLimitPolicy,
    /// Policy applied to each authenticated identity independently
    #[serde(default = "default_authenticated_policy")]
    pub authenticated: RateLimitPolicy,
}

fn default_enabled() -> bool {
    true
}

fn default_anonymous_policy() -> RateLimitPolicy {
    RateLimitPolicy::new(3, 60)
}

fn default_authenticated_policy() -> RateLimitPolicy {
    RateLimitPolicy::new(9, 60)
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            anonymous: default_anonymous_policy(),
            authenticated: default_authenticated_policy(),
        }
    }
}

impl RateLimitConfig {
    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, policy) in [
            ("anonymous", &self.anonymous),
            ("authenticated", &self.authenticated),
        ] {
            if policy.limit == 0 {
                return Err(format!("{} rate limit must be greater than 0", name));
            }
            if policy.window_secs == 0 {
                return Err(format!("{} rate limit window must be greater than 0", name));
            }
        }
        Ok(())
    }
}
