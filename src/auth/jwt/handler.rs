//! Core JWT handler implementation

use super::types::{Claims, IssuedToken, JwtHandler};
use crate::config::AuthConfig;
use crate::core::identity::UNAUTHENTICATED_USER;
use crate::utils::error::{GatewayError, Result};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, error, warn};

const INVALID_CREDENTIALS: &str = "Invalid authentication credentials";

impl JwtHandler {
    /// Create a new JWT handler
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let algorithm = Algorithm::from_str(&config.jwt_algorithm).map_err(|_| {
            GatewayError::config(format!("Unknown JWT algorithm: {}", config.jwt_algorithm))
        })?;
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(GatewayError::config(format!(
                "JWT algorithm {:?} is not an HMAC algorithm",
                algorithm
            )));
        }

        let secret = config.jwt_secret.as_bytes();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            expiration: config.jwt_expiration,
        })
    }

    /// Issue a token for `subject` with the configured lifetime
    pub fn issue(&self, subject: &str) -> Result<IssuedToken> {
        self.issue_with_ttl(subject, self.expiration)
    }

    /// Issue a token for `subject` valid for `ttl_secs`
    pub fn issue_with_ttl(&self, subject: &str, ttl_secs: u64) -> Result<IssuedToken> {
        self.issue_at(subject, ttl_secs, now_secs()?)
    }

    /// Issue a token as if the current time were `now` (Unix seconds)
    pub fn issue_at(&self, subject: &str, ttl_secs: u64, now: u64) -> Result<IssuedToken> {
        if subject.trim().is_empty() {
            return Err(GatewayError::validation("Token subject cannot be empty"));
        }

        let claims = Claims {
            sub: subject.to_string(),
            iat: Some(now),
            exp: now.saturating_add(ttl_secs),
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key)
            .map_err(|e| GatewayError::internal(format!("Failed to sign token: {}", e)))?;

        debug!("Issued access token for user: {}", subject);
        Ok(IssuedToken::bearer(token, ttl_secs))
    }

    /// Resolve a raw bearer token to a caller identity
    ///
    /// A missing or blank token resolves to the unauthenticated identity.
    pub fn verify(&self, token: Option<&str>) -> Result<String> {
        match token.map(str::trim) {
            None | Some("") => Ok(UNAUTHENTICATED_USER.to_string()),
            Some(token) => self.verify_at(token, now_secs()?),
        }
    }

    /// Verify `token` as if the current time were `now` (Unix seconds)
    ///
    /// Tokens are rejected at or after `exp` with no leeway.
    pub fn verify_at(&self, token: &str, now: u64) -> Result<String> {
        let claims = self.decode_claims(token)?;

        if now >= claims.exp {
            warn!("Rejected expired token for user: {}", claims.sub);
            return Err(GatewayError::unauthorized(INVALID_CREDENTIALS));
        }
        if claims.sub.trim().is_empty() {
            warn!("Rejected token with empty subject");
            return Err(GatewayError::unauthorized(INVALID_CREDENTIALS));
        }

        debug!("Token verified for user: {}", claims.sub);
        Ok(claims.sub)
    }

    /// Configured token lifetime in seconds
    pub fn expiration(&self) -> u64 {
        self.expiration
    }

    fn decode_claims(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked against an explicit clock in verify_at
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(classify_decode_error)
    }
}

/// Split decode failures into caller faults and server faults
fn classify_decode_error(e: jsonwebtoken::errors::Error) -> GatewayError {
    match e.kind() {
        ErrorKind::InvalidEcdsaKey
        | ErrorKind::InvalidRsaKey(_)
        | ErrorKind::RsaFailedSigning
        | ErrorKind::InvalidKeyFormat
        | ErrorKind::Crypto(_) => {
            error!("JWT key failure during verification: {}", e);
            GatewayError::internal(format!("Token verification failed: {}", e))
        }
        _ => {
            warn!("JWT verification failed: {}", e);
            GatewayError::unauthorized(INVALID_CREDENTIALS)
        }
    }
}

fn now_secs() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| GatewayError::internal(format!("System time error: {}", e)))
}
