//! Position repository trait.

use async_trait::async_trait;

use crate::domain::entities::position::Position;
use crate::errors::DomainError;

/// Read access to the job positions, plus the upsert used by seeding
#[async_trait]
pub trait PositionRepository: Send + Sync {
    /// All positions ordered by identifier
    async fn list_all(&self) -> Result<Vec<Position>, DomainError>;

    /// Check whether a position with this identifier exists
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Position>, DomainError>;

    /// Insert the position, or rename it if the identifier is taken
    async fn upsert(&self, position: Position) -> Result<(), DomainError>;
}
