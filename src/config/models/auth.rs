//! Authentication configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Secret used when `JWT_SECRET_KEY` is not provided
pub const DEFAULT_JWT_SECRET: &str = "your_secret_key_here";

/// HMAC algorithms accepted for token signing
pub const SUPPORTED_JWT_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

/// Authentication configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT signing secret
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// JWT signing algorithm
    #[serde(default = "default_jwt_algorithm")]
    pub jwt_algorithm: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
    /// Users accepted by `POST /token`; the built-in test user is used when empty
    #[serde(default)]
    pub users: Vec<UserCredential>,
}

/// A configured user with an Argon2 password hash
#[derive(Clone, Serialize, Deserialize)]
pub struct UserCredential {
    pub username: String,
    pub password_hash: String,
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_jwt_expiration() -> u64 {
    30 * 60
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_algorithm: default_jwt_algorithm(),
            jwt_expiration: default_jwt_expiration(),
            users: Vec::new(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("jwt_expiration", &self.jwt_expiration)
            .field("users", &self.users)
            .finish()
    }
}

impl std::fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredential")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

impl AuthConfig {
    /// Whether the signing secret is still the shipped placeholder
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.is_empty() {
            return Err("JWT secret cannot be empty".to_string());
        }

        if !SUPPORTED_JWT_ALGORITHMS.contains(&self.jwt_algorithm.as_str()) {
            return Err(format!(
                "Unsupported JWT algorithm '{}', expected one of {}",
                self.jwt_algorithm,
                SUPPORTED_JWT_ALGORITHMS.join(", ")
            ));
        }

        if self.jwt_expiration == 0 {
            return Err("JWT expiration must be greater than 0".to_string());
        }

        for user in &self.users {
            if user.username.trim().is_empty() {
                return Err("Configured username cannot be empty".to_string());
            }
            if !user.password_hash.starts_with("$argon2") {
                return Err(format!(
                    "Password hash for user '{}' is not an Argon2 hash",
                    user.username
                ));
            }
        }

        Ok(())
    }
}

/// Warn about insecure configurations
pub fn warn_insecure_config(config: &AuthConfig) {
    if config.uses_default_secret() {
        warn!(
            "JWT_SECRET_KEY is not set; tokens are signed with the default secret. Set JWT_SECRET_KEY before deploying to production."
        );
    }
}
