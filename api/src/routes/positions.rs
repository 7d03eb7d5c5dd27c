//! `GET /api/positions`

use actix_web::{web, HttpResponse};

use ud_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{PositionDto, PositionsResponse};
use crate::handlers::error::ApiError;

/// List all positions; an empty directory answers 404
pub async fn list_positions(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let positions = state.directory.list_positions().await?;
    let body = PositionsResponse {
        positions: positions.into_iter().map(PositionDto::from).collect(),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(body)))
}
