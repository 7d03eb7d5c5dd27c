//! HTTP surface of the user directory
//!
//! Library exports for the binary and for the integration tests in `tests/`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
pub use handlers::error::ApiError;
