//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - Token store backend (in-process slot or Redis)
//! - `database` - Database connection, pool and seeding configuration
//! - `environment` - Environment detection and logging configuration
//! - `image_service` - External image optimization API credentials
//! - `server` - HTTP server and public URL configuration
//! - `storage` - Photo storage directories and target dimensions

pub mod cache;
pub mod database;
pub mod environment;
pub mod image_service;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Re-export commonly used types
pub use cache::{CacheConfig, TokenStoreDriver};
pub use database::{DatabaseConfig, SeedConfig};
pub use environment::{Environment, LoggingConfig};
pub use image_service::ImageServiceConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Seed data configuration
    #[serde(default)]
    pub seed: SeedConfig,

    /// Token store configuration
    pub cache: CacheConfig,

    /// Photo storage configuration
    pub storage: StorageConfig,

    /// Image optimization service configuration
    pub image_service: ImageServiceConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            seed: SeedConfig::default(),
            cache: CacheConfig::default(),
            storage: StorageConfig::default(),
            image_service: ImageServiceConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            seed: SeedConfig::from_env(),
            cache: CacheConfig::from_env(),
            storage: StorageConfig::from_env(),
            image_service: ImageServiceConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or unparseable.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a boolean flag (`1`, `true`, `yes`, `on`).
pub(crate) fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
