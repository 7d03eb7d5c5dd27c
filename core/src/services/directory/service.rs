//! Directory query service

use std::sync::Arc;

use ud_shared::types::pagination::{DEFAULT_COUNT, DEFAULT_PAGE};
use ud_shared::{PaginatedResponse, Pagination, ValidationErrors};

use crate::domain::entities::{Position, User};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{PositionRepository, UserRepository};

/// Raw `page` / `count` query values
#[derive(Debug, Clone, Default)]
pub struct UsersQuery {
    pub page: Option<String>,
    pub count: Option<String>,
}

impl UsersQuery {
    pub fn new(page: Option<&str>, count: Option<&str>) -> Self {
        Self {
            page: page.map(str::to_string),
            count: count.map(str::to_string),
        }
    }
}

/// Read-only access to positions and users
pub struct DirectoryService {
    users: Arc<dyn UserRepository>,
    positions: Arc<dyn PositionRepository>,
}

impl DirectoryService {
    pub fn new(users: Arc<dyn UserRepository>, positions: Arc<dyn PositionRepository>) -> Self {
        Self { users, positions }
    }

    /// All positions; an empty directory is reported as not found
    pub async fn list_positions(&self) -> DomainResult<Vec<Position>> {
        let positions = self.positions.list_all().await?;
        if positions.is_empty() {
            return Err(DomainError::not_found("Positions"));
        }
        Ok(positions)
    }

    /// One page of users ordered by id
    ///
    /// `page` and `count` default to 1 and 5. Present values must be
    /// integers ≥ 1; anything else is a validation failure. A page past the
    /// end yields an empty item list.
    pub async fn list_users(&self, query: &UsersQuery) -> DomainResult<PaginatedResponse<User>> {
        let mut errors = ValidationErrors::new();
        let page = parse_positive(query.page.as_deref(), "page", "Page", DEFAULT_PAGE, &mut errors);
        let count = parse_positive(query.count.as_deref(), "count", "Count", DEFAULT_COUNT, &mut errors);
        if errors.has_errors() {
            return Err(errors.into());
        }

        let pagination = Pagination::new(page, count);
        let total = self.users.count().await?;
        let users = if pagination.offset() >= total {
            Vec::new()
        } else {
            self.users.paginate(pagination.offset(), pagination.limit()).await?
        };

        Ok(PaginatedResponse::new(users, pagination, total))
    }

    /// Look up a single user by the raw path segment
    pub async fn get_user(&self, raw_id: &str) -> DomainResult<User> {
        let id = match raw_id.trim().parse::<i64>() {
            Ok(id) if id > 0 => id,
            _ => {
                return Err(DomainError::parameter(
                    "id",
                    "The user ID must be an integer.",
                ))
            }
        };

        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }
}

fn parse_positive(
    raw: Option<&str>,
    field: &str,
    label: &str,
    default: u64,
    errors: &mut ValidationErrors,
) -> u64 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 1 => u64::try_from(value).unwrap_or(default),
        Ok(_) => {
            errors.add(field, format!("The {} field must be at least 1.", field));
            default
        }
        Err(_) => {
            errors.add(field, format!("{} must be a number.", label));
            default
        }
    }
}
