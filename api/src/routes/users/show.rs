use actix_web::{web, HttpResponse};

use ud_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{UserDto, UserResponse};
use crate::handlers::error::ApiError;

/// `GET /api/users/{id}`
pub async fn show_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user = state.directory.get_user(&id).await?;
    let body = UserResponse {
        user: UserDto::from_user(user, &state.app_url),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(body)))
}
