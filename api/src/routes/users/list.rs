use actix_web::{web, HttpResponse};
use serde::Deserialize;

use ud_core::services::UsersQuery;
use ud_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::UsersPageResponse;
use crate::handlers::error::ApiError;

/// Raw query string; parsed and validated by the directory service
#[derive(Debug, Default, Deserialize)]
pub struct UsersQueryParams {
    pub page: Option<String>,
    pub count: Option<String>,
}

/// `GET /api/users?page=&count=`
pub async fn list_users(
    state: web::Data<AppState>,
    params: web::Query<UsersQueryParams>,
) -> Result<HttpResponse, ApiError> {
    let query = UsersQuery::new(params.page.as_deref(), params.count.as_deref());
    let page = state.directory.list_users(&query).await?;

    let body = UsersPageResponse::from_page(page, &state.users_url(), &state.app_url);
    Ok(HttpResponse::Ok().json(ApiResponse::success(body)))
}
