//! Token issuance endpoint

use crate::auth::{CredentialCheck, IssuedToken};
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::web;
use serde::Deserialize;
use tracing::{info, warn};

/// Form body of `POST /token`
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// `POST /token`
pub async fn issue_token(
    state: web::Data<AppState>,
    form: web::Form<TokenRequest>,
) -> Result<web::Json<IssuedToken>> {
    let TokenRequest { username, password } = form.into_inner();

    match state.credentials.verify(&username, &password).await? {
        CredentialCheck::Valid(identity) => {
            let token = state.jwt.issue(&identity)?;
            info!("Issued access token for user: {}", identity);
            Ok(web::Json(token))
        }
        CredentialCheck::InvalidPassword => {
            warn!("Invalid password for user: {}", username);
            Err(GatewayError::unauthorized(format!(
                "Invalid password for {}.",
                username
            )))
        }
        CredentialCheck::UnknownUser => {
            warn!("Token requested for unknown user: {}", username);
            Err(GatewayError::unauthorized(
                "Invalid authentication credentials",
            ))
        }
    }
}
