//! User representations returned by the users endpoints

use serde::{Deserialize, Serialize};

use ud_core::domain::User;
use ud_shared::{PageLinks, PaginatedResponse};

/// A user as shown to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Position name, `null` if the position no longer exists
    pub position: Option<String>,
    /// `null` for rows without a position reference
    pub position_id: Option<i64>,
    /// Unix timestamp of creation
    pub registration_timestamp: i64,
    /// Absolute photo URL under `<APP_URL>/storage/`
    pub photo: String,
}

impl UserDto {
    pub fn from_user(user: User, app_url: &str) -> Self {
        let photo = user.photo_url(app_url);
        let registration_timestamp = user.registration_timestamp();
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            position: user.position,
            position_id: user.position_id,
            registration_timestamp,
            photo,
        }
    }
}

/// Body of `GET /api/users/{id}` and `POST /api/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserDto,
}

/// Body of `GET /api/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersPageResponse {
    pub page: u64,
    pub total_pages: u64,
    pub total_users: u64,
    pub count: u64,
    pub links: PageLinks,
    pub users: Vec<UserDto>,
}

impl UsersPageResponse {
    /// Render a page of users; links point at `users_url`
    pub fn from_page(page: PaginatedResponse<User>, users_url: &str, app_url: &str) -> Self {
        let links = page.links(users_url);
        let page = page.map(|user| UserDto::from_user(user, app_url));
        Self {
            page: page.page,
            total_pages: page.total_pages,
            total_users: page.total,
            count: page.count,
            links,
            users: page.items,
        }
    }
}
