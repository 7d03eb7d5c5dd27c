//! Registration workflow module
//!
//! Orchestrates the token gate, field validation, the photo pipeline and
//! the user insert. The live token is consumed only after a user row has
//! been created.

mod config;
mod service;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use config::RegistrationServiceConfig;
pub use service::RegistrationService;
pub use types::{RegistrationCandidate, ValidatedRegistration};
pub use validation::{
    RegistrationValidator, NAME_MAX_CHARS, NAME_MIN_CHARS, PHOTO_MAX_BYTES, PHOTO_MIN_HEIGHT,
    PHOTO_MIN_WIDTH,
};
