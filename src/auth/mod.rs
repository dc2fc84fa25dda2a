//! Authentication
//!
//! Bearer token issuance/verification and the username/password check behind
//! `POST /token`.

pub mod credentials;
pub mod jwt;
pub mod password;

// Re-export commonly used types
pub use credentials::{
    CredentialCheck, CredentialVerifier, StaticCredentialStore, TestCredentialProvider,
    verifier_from_config,
};
pub use jwt::{Claims, IssuedToken, JwtHandler};
