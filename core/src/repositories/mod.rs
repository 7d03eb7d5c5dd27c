pub mod position;
pub mod user;

pub use position::{InMemoryPositionRepository, PositionRepository};
pub use user::{InMemoryUserRepository, UserRepository};
