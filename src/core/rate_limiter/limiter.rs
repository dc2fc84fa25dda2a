//! Core rate limiter implementation

use super::types::RateLimitResult;
use crate::config::models::rate_limit::{RateLimitConfig, RateLimitPolicy};
use crate::core::identity::is_unauthenticated;
use crate::utils::error::{GatewayError, Result};
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again later.";

/// Sliding window rate limiter keyed by caller identity
///
/// Every unauthenticated caller shares one bucket under the anonymous policy;
/// each authenticated identity gets its own bucket under the authenticated
/// policy. Prune, count and append for one identity happen under that
/// identity's shard lock, so concurrent requests for the same identity are
/// serialised while distinct identities proceed in parallel.
pub struct RateLimiter {
    /// Rate limit configuration
    config: RateLimitConfig,
    /// Request timestamps by identity, oldest first
    entries: DashMap<String, VecDeque<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            entries: DashMap::new(),
        }
    }

    /// Policy that applies to `identity`
    pub fn policy_for(&self, identity: &str) -> &RateLimitPolicy {
        if is_unauthenticated(identity) {
            &self.config.anonymous
        } else {
            &self.config.authenticated
        }
    }

    /// Admit or reject a request for `identity` at the current instant
    pub fn check_and_record(&self, identity: &str) -> Result<RateLimitResult> {
        self.check_and_record_at(identity, Instant::now())
    }

    /// Admit or reject a request for `identity` at `now`
    ///
    /// Rejected attempts are not recorded.
    pub fn check_and_record_at(&self, identity: &str, now: Instant) -> Result<RateLimitResult> {
        let policy = *self.policy_for(identity);
        if !self.config.enabled {
            return Ok(RateLimitResult::unlimited(policy.limit));
        }

        let window = policy.window();

        // Avoid String allocation if the identity already has a bucket
        let mut entry = match self.entries.get_mut(identity) {
            Some(e) => e,
            None => self.entries.entry(identity.to_string()).or_default(),
        };
        let timestamps = entry.value_mut();

        prune(timestamps, now, window);

        let current_count = timestamps.len() as u32;
        if current_count >= policy.limit {
            let retry_after_secs = timestamps
                .front()
                .map(|&oldest| retry_after(oldest, now, window))
                .unwrap_or_else(|| window.as_secs().max(1));
            drop(entry);

            warn!(
                "Rate limit exceeded for {}: {}/{} requests",
                identity, current_count, policy.limit
            );
            return Err(GatewayError::rate_limit(
                RATE_LIMIT_MESSAGE,
                Some(retry_after_secs),
            ));
        }

        timestamps.push_back(now);
        let current_count = current_count + 1;
        drop(entry);

        debug!(
            "User {}: {}/{} requests used",
            identity, current_count, policy.limit
        );

        Ok(RateLimitResult {
            limit: policy.limit,
            current_count,
            remaining: policy.limit - current_count,
        })
    }

    /// Number of requests recorded for `identity` inside the window ending at `now`
    pub fn current_count_at(&self, identity: &str, now: Instant) -> u32 {
        let window = self.policy_for(identity).window();
        let cutoff = now.checked_sub(window);
        self.entries
            .get(identity)
            .map(|timestamps| {
                timestamps
                    .iter()
                    .filter(|&&t| cutoff.is_none_or(|cutoff| t > cutoff))
                    .count() as u32
            })
            .unwrap_or(0)
    }

    /// Drop identities whose whole window has aged out
    pub fn cleanup(&self, now: Instant) {
        self.entries.retain(|identity, timestamps| {
            let window = self.policy_for(identity).window();
            prune(timestamps, now, window);
            !timestamps.is_empty()
        });
    }

    /// Forget all recorded requests
    pub fn reset(&self) {
        self.entries.clear();
    }

    /// Number of identities currently tracked
    pub fn tracked_identities(&self) -> usize {
        self.entries.len()
    }

    /// Check if rate limiting is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Start a background task that runs [`cleanup`](Self::cleanup) once per window
    pub fn start_cleanup_task(self: Arc<Self>) -> JoinHandle<()> {
        let period = self
            .config
            .anonymous
            .window()
            .max(self.config.authenticated.window());
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                self.cleanup(Instant::now());
            }
        })
    }
}

/// Remove timestamps at or before `now - window`
fn prune(timestamps: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    let Some(cutoff) = now.checked_sub(window) else {
        return;
    };
    while timestamps.front().is_some_and(|&t| t <= cutoff) {
        timestamps.pop_front();
    }
}

/// Whole seconds until `oldest` leaves the window, at least 1
fn retry_after(oldest: Instant, now: Instant, window: Duration) -> u64 {
    let remaining = window.saturating_sub(now.saturating_duration_since(oldest));
    let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
    secs.max(1)
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("config", &self.config)
            .field("tracked_identities", &self.entries.len())
            .finish()
    }
}
