//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - User and position repositories
//! - Startup seeders for positions and synthetic users

pub mod connection;
pub mod mysql;
pub mod seed;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{MySqlPositionRepository, MySqlUserRepository};
pub use seed::{seed_positions, seed_users, SeedReport};
