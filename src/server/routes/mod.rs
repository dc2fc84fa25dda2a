//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod chat;
pub mod model_info;
pub mod root;
pub mod token;
pub mod users;

use actix_web::web;

/// Register every public route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root::root))
        .route("/token", web::post().to(token::issue_token))
        .route("/users/me", web::get().to(users::current_user))
        .route("/model_info", web::get().to(model_info::model_info))
        .route("/chat", web::post().to(chat::chat));
}
