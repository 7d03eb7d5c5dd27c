//! Response bodies
//!
//! Success bodies are `ApiResponse<T>`: `{"success": true, ...fields of T}`.

pub mod position;
pub mod token;
pub mod user;

pub use position::{PositionDto, PositionsResponse};
pub use token::TokenResponse;
pub use user::{UserDto, UserResponse, UsersPageResponse};
