//! User repository trait defining the interface for user data persistence.
//!
//! This module defines the repository pattern interface for User entities.
//! The trait is async-first and uses Result types for proper error handling.
//! Uniqueness of email and phone is enforced by the backing store; the
//! `exists_by_*` probes only let callers report a friendly validation message
//! before attempting the insert.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations return users joined with the name of their position, so
/// `User::position` is populated whenever the referenced position exists.
///
/// # Example
/// ```no_run
/// use ud_core::repositories::{InMemoryUserRepository, UserRepository};
///
/// # async fn example() -> Result<(), ud_core::errors::DomainError> {
/// let repo = InMemoryUserRepository::new();
/// if !repo.exists_by_email("jane@example.com").await? {
///     println!("email is free");
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user row
    ///
    /// # Arguments
    /// * `user` - Validated fields plus the stored photo reference
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with its assigned identifier and timestamp
    /// * `Err(DomainError)` - Insert failed (e.g., a uniqueness constraint was
    ///   violated by a concurrent registration)
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Find a user by identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Fetch one page of users ordered by identifier ascending
    ///
    /// # Arguments
    /// * `offset` - Number of rows to skip
    /// * `limit` - Maximum number of rows to return
    async fn paginate(&self, offset: u64, limit: u64) -> Result<Vec<User>, DomainError>;

    /// Total number of users
    async fn count(&self) -> Result<u64, DomainError>;

    /// Check whether a user with this exact email exists
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether a user with this exact phone exists
    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError>;
}
