//! Username/password checks for `POST /token`

use super::password::{hash_password, verify_password};
use crate::config::AuthConfig;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Built-in account accepted when no users are configured
pub const TEST_USERNAME: &str = "testuser";
/// Password of the built-in account
pub const TEST_PASSWORD: &str = "testpassword";

/// Outcome of a credential check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialCheck {
    /// Credentials match; carries the identity to put in the token
    Valid(String),
    /// The user exists but the password is wrong
    InvalidPassword,
    /// No such user
    UnknownUser,
}

/// Checks a username/password pair
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Result<CredentialCheck>;
}

/// Accepts only the fixed `testuser`/`testpassword` pair
#[derive(Debug, Clone, Copy, Default)]
pub struct TestCredentialProvider;

#[async_trait]
impl CredentialVerifier for TestCredentialProvider {
    async fn verify(&self, username: &str, password: &str) -> Result<CredentialCheck> {
        if username != TEST_USERNAME {
            return Ok(CredentialCheck::UnknownUser);
        }
        if password != TEST_PASSWORD {
            return Ok(CredentialCheck::InvalidPassword);
        }
        Ok(CredentialCheck::Valid(username.to_string()))
    }
}

/// Users loaded from configuration, each with an Argon2 hash
///
/// Unknown usernames are checked against a throwaway hash so that both
/// outcomes cost one Argon2 verification.
#[derive(Clone)]
pub struct StaticCredentialStore {
    users: HashMap<String, String>,
    dummy_hash: Option<String>,
}

impl StaticCredentialStore {
    /// Build a store from `(username, argon2 hash)` pairs
    pub fn new<I, U, H>(users: I) -> Self
    where
        I: IntoIterator<Item = (U, H)>,
        U: Into<String>,
        H: Into<String>,
    {
        let dummy_hash = hash_password(&Uuid::new_v4().to_string())
            .map_err(|e| warn!("Failed to prepare dummy password hash: {}", e))
            .ok();

        Self {
            users: users
                .into_iter()
                .map(|(u, h)| (u.into(), h.into()))
                .collect(),
            dummy_hash,
        }
    }

    /// Number of known users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl std::fmt::Debug for StaticCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialStore")
            .field("users", &self.users.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialStore {
    async fn verify(&self, username: &str, password: &str) -> Result<CredentialCheck> {
        let Some(hash) = self.users.get(username).cloned() else {
            if let Some(dummy) = self.dummy_hash.clone() {
                check_password(password, dummy).await?;
            }
            return Ok(CredentialCheck::UnknownUser);
        };

        if check_password(password, hash).await? {
            Ok(CredentialCheck::Valid(username.to_string()))
        } else {
            Ok(CredentialCheck::InvalidPassword)
        }
    }
}

/// Run an Argon2 verification off the async runtime
async fn check_password(password: &str, hash: String) -> Result<bool> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| GatewayError::internal(format!("Password check task failed: {}", e)))?
}

/// Pick the credential verifier described by `config`
pub fn verifier_from_config(config: &AuthConfig) -> Arc<dyn CredentialVerifier> {
    if config.users.is_empty() {
        debug!("No users configured, accepting the built-in test user");
        Arc::new(TestCredentialProvider)
    } else {
        debug!("Loaded {} configured users", config.users.len());
        Arc::new(StaticCredentialStore::new(
            config
                .users
                .iter()
                .map(|u| (u.username.clone(), u.password_hash.clone())),
        ))
    }
}
