//! Caller identity
//!
//! An identity is an opaque string derived per request from a verified token
//! subject, or the sentinel [`UNAUTHENTICATED_USER`] when no token was presented.

/// Identity assigned to callers that present no token
pub const UNAUTHENTICATED_USER: &str = "unauthenticated_user";

/// Map a missing or blank identity to [`UNAUTHENTICATED_USER`]
pub fn normalize_identity(identity: Option<&str>) -> &str {
    match identity {
        Some(id) if !id.trim().is_empty() => id,
        _ => UNAUTHENTICATED_USER,
    }
}

/// Whether `identity` is the unauthenticated sentinel
pub fn is_unauthenticated(identity: &str) -> bool {
    identity == UNAUTHENTICATED_USER
}
