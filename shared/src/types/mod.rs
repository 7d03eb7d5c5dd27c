//! Type definitions module
//!
//! - `pagination` - Page/count arithmetic and navigation links
//! - `response` - Success envelope and health check body

pub mod pagination;
pub mod response;

pub use pagination::{PageLinks, PaginatedResponse, Pagination};
pub use response::{ApiResponse, HealthResponse};
