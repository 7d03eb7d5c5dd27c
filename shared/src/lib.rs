//! Shared utilities and common types for the user directory server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response envelopes used by every endpoint
//! - Pagination arithmetic
//! - Utility functions (phone format, field validation collectors)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, DatabaseConfig, Environment, ImageServiceConfig, LoggingConfig,
    SeedConfig, ServerConfig, StorageConfig, TokenStoreDriver,
};
pub use errors::ErrorResponse;
pub use types::{ApiResponse, HealthResponse, PageLinks, PaginatedResponse, Pagination};
pub use utils::{phone, validation, validation::ValidationErrors};
