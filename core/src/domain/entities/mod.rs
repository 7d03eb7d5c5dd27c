//! Domain entities representing core business objects.

pub mod admission_token;
pub mod position;
pub mod user;


// Re-export commonly used types
pub use admission_token::{AdmissionToken, TOKEN_ENTROPY_BYTES, TOKEN_TTL_MINUTES};
pub use position::{Position, DEFAULT_POSITIONS};
pub use user::{NewUser, User, DEFAULT_PHOTO};
