//! In-memory implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;
use crate::repositories::position::PositionRepository;

use super::trait_::UserRepository;

#[derive(Default)]
struct State {
    users: BTreeMap<i64, User>,
    next_id: i64,
    create_failure: Option<String>,
}

/// User repository kept in process memory.
///
/// Mirrors the relational store closely enough for workflow tests: ids are
/// assigned sequentially from 1, email and phone are unique, and position
/// names are joined from the attached position repository at read time.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<State>>,
    positions: Option<Arc<dyn PositionRepository>>,
}

impl InMemoryUserRepository {
    /// Create a new repository without position lookups
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                next_id: 1,
                ..Default::default()
            })),
            positions: None,
        }
    }

    /// Create a repository that joins position names and enforces the
    /// position reference on insert
    pub fn with_positions(positions: Arc<dyn PositionRepository>) -> Self {
        Self {
            positions: Some(positions),
            ..Self::new()
        }
    }

    /// Make every subsequent `create` fail with `message` (None restores normal behavior)
    pub async fn set_create_failure(&self, message: Option<String>) {
        self.state.write().await.create_failure = message;
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn join_position(&self, mut user: User) -> Result<User, DomainError> {
        if let Some(positions) = &self.positions {
            user.position = match user.position_id {
                Some(id) => positions.find_by_id(id).await?.map(|p| p.name),
                None => None,
            };
        }
        Ok(user)
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        if let Some(positions) = &self.positions {
            if !positions.exists(user.position_id).await? {
                return Err(DomainError::internal(
                    "Cannot add or update a child row: a foreign key constraint fails (position_id)",
                ));
            }
        }

        let created = {
            let mut state = self.state.write().await;

            if let Some(message) = &state.create_failure {
                return Err(DomainError::internal(message.clone()));
            }

            // Check for duplicates the way a unique index would
            if state.users.values().any(|u| u.email == user.email) {
                return Err(DomainError::internal(format!(
                    "Duplicate entry '{}' for key 'users_email_unique'",
                    user.email
                )));
            }
            if state.users.values().any(|u| u.phone == user.phone) {
                return Err(DomainError::internal(format!(
                    "Duplicate entry '{}' for key 'users_phone_unique'",
                    user.phone
                )));
            }

            let id = state.next_id;
            state.next_id += 1;

            let created = user.into_user(id, None, Utc::now());
            state.users.insert(id, created.clone());
            created
        };

        self.join_position(created).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let user = self.state.read().await.users.get(&id).cloned();
        match user {
            Some(user) => Ok(Some(self.join_position(user).await?)),
            None => Ok(None),
        }
    }

    async fn paginate(&self, offset: u64, limit: u64) -> Result<Vec<User>, DomainError> {
        let page: Vec<User> = {
            let state = self.state.read().await;
            let skip = usize::try_from(offset).unwrap_or(usize::MAX);
            let take = usize::try_from(limit).unwrap_or(usize::MAX);
            state.users.values().skip(skip).take(take).cloned().collect()
        };

        let mut users = Vec::with_capacity(page.len());
        for user in page {
            users.push(self.join_position(user).await?);
        }
        Ok(users)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.state.read().await.users.len() as u64)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.values().any(|u| u.email == email))
    }

    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.values().any(|u| u.phone == phone))
    }
}
