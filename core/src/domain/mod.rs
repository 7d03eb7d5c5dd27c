//! Domain layer containing business entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::{
    AdmissionToken, NewUser, Position, User, DEFAULT_PHOTO, DEFAULT_POSITIONS,
    TOKEN_ENTROPY_BYTES, TOKEN_TTL_MINUTES,
};
