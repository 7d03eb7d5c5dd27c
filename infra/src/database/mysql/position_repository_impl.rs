//! MySQL implementation of the PositionRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use ud_core::domain::entities::position::Position;
use ud_core::errors::DomainError;
use ud_core::repositories::PositionRepository;

use super::{db_error, to_domain_id};

/// MySQL implementation of PositionRepository
pub struct MySqlPositionRepository {
    pool: MySqlPool,
}

impl MySqlPositionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_position(row: &sqlx::mysql::MySqlRow) -> Result<Position, DomainError> {
        let id: u64 = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let name: String = row
            .try_get("name")
            .map_err(|e| db_error("Failed to get name", e))?;
        Ok(Position::new(to_domain_id(id)?, name))
    }
}

#[async_trait]
impl PositionRepository for MySqlPositionRepository {
    async fn list_all(&self) -> Result<Vec<Position>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM positions ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list positions", e))?;

        rows.iter().map(Self::row_to_position).collect()
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Position>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM positions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find position", e))?;

        row.as_ref().map(Self::row_to_position).transpose()
    }

    async fn upsert(&self, position: Position) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO positions (id, name, created_at, updated_at)
            VALUES (?, ?, NOW(), NOW())
            ON DUPLICATE KEY UPDATE name = VALUES(name), updated_at = NOW()
            "#,
        )
        .bind(position.id)
        .bind(&position.name)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to upsert position", e))?;

        tracing::debug!(position_id = position.id, name = %position.name, "Position upserted");
        Ok(())
    }
}
