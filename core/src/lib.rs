//! # User Directory Core
//!
//! Core business logic and domain layer for the user directory backend.
//! This crate contains domain entities, the registration workflow and its
//! collaborators (token store, photo pipeline), read-only directory queries,
//! repository interfaces with in-memory implementations, and the error
//! taxonomy shared by every layer above it.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
