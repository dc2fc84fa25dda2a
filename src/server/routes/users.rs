//! Caller introspection endpoint

use crate::server::middleware::CallerIdentity;
use actix_web::HttpResponse;
use serde_json::json;

/// `GET /users/me`
pub async fn current_user(identity: CallerIdentity) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "user_id": identity.into_inner() }))
}
