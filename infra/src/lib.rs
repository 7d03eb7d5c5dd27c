//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `ud_core`:
//!
//! - **Database**: MySQL user and position repositories using SQLx, the
//!   connection pool and startup seeders
//! - **Cache**: Redis client and the Redis-backed registration token store
//! - **Image**: Tinify client implementing the cover-crop transformer

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Cache module - Redis client and token slot
pub mod cache;

/// Image module - external optimization API
pub mod image;

pub use cache::{RedisClient, RedisTokenStore};
pub use database::{DatabasePool, MySqlPositionRepository, MySqlUserRepository};
pub use image::TinifyImageTransformer;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The image service answered with an error status
    #[error("Image service error: {0}")]
    ImageService(String),
}

impl From<InfrastructureError> for ud_core::errors::DomainError {
    fn from(e: InfrastructureError) -> Self {
        ud_core::errors::DomainError::Internal {
            message: e.to_string(),
        }
    }
}
