use actix_web::{web, HttpRequest, HttpResponse};

use ud_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{UserDto, UserResponse};
use crate::handlers::error::ApiError;
use crate::middleware::bearer_token;

use super::multipart::read_candidate;

/// `POST /api/users`
///
/// Multipart body with `name`, `email`, `phone`, `position_id` and `photo`.
/// Admission is checked by `RegistrationTokenGuard` before this runs and
/// again by the registration service.
pub async fn register_user(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let bearer = bearer_token(req.headers());
    let candidate = read_candidate(&req, payload, state.max_payload_size).await?;

    let user = state
        .registration
        .register(candidate, bearer.as_deref())
        .await?;

    let body = UserResponse {
        user: UserDto::from_user(user, &state.app_url),
    };
    Ok(HttpResponse::Created().json(ApiResponse::success(body)))
}
