//! JWT utility functions

use super::types::JwtHandler;

impl JwtHandler {
    /// Extract the token from an `Authorization` header value
    ///
    /// The scheme is matched case-insensitively. Any scheme other than
    /// `Bearer`, or a bearer header with no token, yields `None`.
    pub fn extract_bearer(header_value: &str) -> Option<&str> {
        let (scheme, token) = header_value.trim().split_once(char::is_whitespace)?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        let token = token.trim();
        (!token.is_empty()).then_some(token)
    }
}
