//! MySQL implementation of the UserRepository trait.
//!
//! Reads join `positions` so every returned user carries its position name.
//! Uniqueness of email and phone is enforced by the table's unique keys.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ud_core::domain::entities::user::{NewUser, User};
use ud_core::errors::DomainError;
use ud_core::repositories::UserRepository;

use super::{db_error, to_domain_id};

const SELECT_USER: &str = r#"
    SELECT u.id, u.name, u.email, u.phone, u.position_id, p.name AS position,
           u.photo, u.created_at
    FROM users u
    LEFT JOIN positions p ON p.id = u.position_id
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: u64 = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let position_id: Option<u64> = row
            .try_get("position_id")
            .map_err(|e| db_error("Failed to get position_id", e))?;
        let created_at: Option<DateTime<Utc>> = row
            .try_get("created_at")
            .map_err(|e| db_error("Failed to get created_at", e))?;

        Ok(User {
            id: to_domain_id(id)?,
            name: row
                .try_get("name")
                .map_err(|e| db_error("Failed to get name", e))?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to get email", e))?,
            phone: row
                .try_get("phone")
                .map_err(|e| db_error("Failed to get phone", e))?,
            position_id: position_id.map(to_domain_id).transpose()?,
            position: row
                .try_get("position")
                .map_err(|e| db_error("Failed to get position", e))?,
            photo: row
                .try_get("photo")
                .map_err(|e| db_error("Failed to get photo", e))?,
            created_at: created_at.unwrap_or_else(Utc::now),
        })
    }

    async fn exists_where(&self, column: &str, value: &str) -> Result<bool, DomainError> {
        let query = format!("SELECT COUNT(*) AS total FROM users WHERE {} = ?", column);
        let row = sqlx::query(&query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check uniqueness", e))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| db_error("Failed to get total", e))?;
        Ok(total > 0)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, phone, position_id, photo, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, NOW(), NOW())
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(user.position_id)
        .bind(&user.photo)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create user", e))?;

        let id = to_domain_id(result.last_insert_id())?;
        tracing::info!(user_id = id, "User row inserted");

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::internal(format!("User {} vanished after insert", id)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE u.id = ?", SELECT_USER);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn paginate(&self, offset: u64, limit: u64) -> Result<Vec<User>, DomainError> {
        let query = format!("{} ORDER BY u.id ASC LIMIT ? OFFSET ?", SELECT_USER);
        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list users", e))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to count users", e))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| db_error("Failed to get total", e))?;
        Ok(total.max(0) as u64)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.exists_where("email", email).await
    }

    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError> {
        self.exists_where("phone", phone).await
    }
}
