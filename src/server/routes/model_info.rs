//! Model metadata endpoint

use crate::core::providers::ModelInfo;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::web;

/// `GET /model_info`
pub async fn model_info(state: web::Data<AppState>) -> Result<web::Json<ModelInfo>> {
    Ok(web::Json(state.gateway.model_info()?))
}
