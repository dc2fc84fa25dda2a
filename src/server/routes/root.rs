//! Landing endpoint

use actix_web::HttpResponse;
use serde_json::json;

/// `GET /`
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Welcome to the Chat API!" }))
}
