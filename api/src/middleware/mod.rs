pub mod cors;
pub mod registration_token;

pub use cors::create_cors;
pub use registration_token::{bearer_token, RegistrationTokenGuard};
