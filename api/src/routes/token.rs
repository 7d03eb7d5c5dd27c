//! `GET /api/token`

use actix_web::{web, HttpResponse};

use ud_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::TokenResponse;
use crate::handlers::error::ApiError;

/// Mint a new registration token, replacing any previous one
pub async fn issue_token(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let token = state.tokens.mint().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(TokenResponse { token })))
}
