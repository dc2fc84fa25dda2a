//! Bearer token extraction

use crate::auth::JwtHandler;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::{Ready, ready};
use tracing::debug;

/// Identity of the caller, resolved from an optional bearer token
///
/// A request with no usable bearer token resolves to the unauthenticated
/// identity. A token that fails verification rejects the request with 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity(pub String);

impl CallerIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromRequest for CallerIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve_identity(req).map_err(Into::into))
    }
}

fn resolve_identity(req: &HttpRequest) -> Result<CallerIdentity, GatewayError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| GatewayError::internal("Application state is not configured"))?;

    let token = bearer_token(req);
    debug!(has_token = token.is_some(), "Resolving caller identity");

    state.jwt.verify(token).map(CallerIdentity)
}

/// Bearer token from the `Authorization` header, if any
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(JwtHandler::extract_bearer)
}
