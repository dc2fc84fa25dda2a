//! Chat endpoint

use crate::core::gateway::ChatResponse;
use crate::server::middleware::CallerIdentity;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::web;
use serde::Deserialize;
use tracing::debug;

/// JSON body of `POST /chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
}

/// `POST /chat`
pub async fn chat(
    state: web::Data<AppState>,
    identity: CallerIdentity,
    request: web::Json<ChatRequest>,
) -> Result<web::Json<ChatResponse>> {
    debug!("Chat request from {}", identity.as_str());

    let response = state
        .gateway
        .handle_chat(&request.prompt, Some(identity.as_str()))
        .await?;

    Ok(web::Json(response))
}
