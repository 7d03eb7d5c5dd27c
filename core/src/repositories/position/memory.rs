//! In-memory implementation of PositionRepository

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::position::Position;
use crate::errors::DomainError;

use super::trait_::PositionRepository;

/// Position repository backed by an ordered map
#[derive(Clone, Default)]
pub struct InMemoryPositionRepository {
    positions: Arc<RwLock<BTreeMap<i64, String>>>,
}

impl InMemoryPositionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the four default positions
    pub fn seeded() -> Self {
        Self::with_positions(Position::defaults())
    }

    pub fn with_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        let map = positions.into_iter().map(|p| (p.id, p.name)).collect();
        Self {
            positions: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl PositionRepository for InMemoryPositionRepository {
    async fn list_all(&self) -> Result<Vec<Position>, DomainError> {
        let positions = self.positions.read().await;
        Ok(positions
            .iter()
            .map(|(id, name)| Position::new(*id, name.clone()))
            .collect())
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.positions.read().await.contains_key(&id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Position>, DomainError> {
        let positions = self.positions.read().await;
        Ok(positions.get(&id).map(|name| Position::new(id, name.clone())))
    }

    async fn upsert(&self, position: Position) -> Result<(), DomainError> {
        self.positions.write().await.insert(position.id, position.name);
        Ok(())
    }
}
