//! Common utility functions

pub mod phone;
pub mod validation;

pub use phone::{is_valid_registration_phone, mask_phone_number};
pub use validation::{is_valid_email, ValidationErrors};
