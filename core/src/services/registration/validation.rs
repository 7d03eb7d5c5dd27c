//! Field rules for registration
//!
//! All five fields are checked on every call and every violation is
//! collected before returning.

use image::{ImageFormat, ImageReader};
use std::io::Cursor;
use std::sync::Arc;

use ud_shared::phone::is_valid_registration_phone;
use ud_shared::validation::{is_valid_email, ValidationErrors};

use crate::errors::{DomainError, DomainResult};
use crate::repositories::{PositionRepository, UserRepository};
use crate::services::photo::UploadedPhoto;

use super::types::{RegistrationCandidate, ValidatedRegistration};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 60;

/// 5 MiB (5120 KiB)
pub const PHOTO_MAX_BYTES: usize = 5120 * 1024;
pub const PHOTO_MIN_WIDTH: u32 = 70;
pub const PHOTO_MIN_HEIGHT: u32 = 70;

/// Checks registration fields against the directory's rules and contents
pub struct RegistrationValidator {
    users: Arc<dyn UserRepository>,
    positions: Arc<dyn PositionRepository>,
}

impl RegistrationValidator {
    pub fn new(users: Arc<dyn UserRepository>, positions: Arc<dyn PositionRepository>) -> Self {
        Self { users, positions }
    }

    /// Validate every field of `candidate`
    ///
    /// # Returns
    ///
    /// * `Ok(ValidatedRegistration)` - All rules passed
    /// * `Err(DomainError::Validation)` - Field → messages for every violation
    /// * `Err(DomainError)` - A repository lookup failed
    pub async fn validate(
        &self,
        candidate: RegistrationCandidate,
    ) -> DomainResult<ValidatedRegistration> {
        let mut errors = ValidationErrors::new();

        let name = present(candidate.name);
        let email = present(candidate.email);
        let phone = present(candidate.phone);
        let position_id = present(candidate.position_id);
        let photo = candidate.photo.filter(|p| !p.is_empty());

        check_name(name.as_deref(), &mut errors);
        self.check_email(email.as_deref(), &mut errors).await?;
        self.check_phone(phone.as_deref(), &mut errors).await?;
        let position_id = self.check_position(position_id.as_deref(), &mut errors).await?;
        check_photo(photo.as_ref(), &mut errors);

        if errors.has_errors() {
            return Err(DomainError::from(errors));
        }

        match (name, email, phone, position_id, photo) {
            (Some(name), Some(email), Some(phone), Some(position_id), Some(photo)) => {
                Ok(ValidatedRegistration {
                    name,
                    email,
                    phone,
                    position_id,
                    photo,
                })
            }
            _ => Err(DomainError::internal("validated registration is incomplete")),
        }
    }

    async fn check_email(
        &self,
        email: Option<&str>,
        errors: &mut ValidationErrors,
    ) -> DomainResult<()> {
        let Some(email) = email else {
            errors.add("email", "The email is required.");
            return Ok(());
        };

        if !is_valid_email(email) {
            errors.add("email", "The email must be a valid email address.");
        } else if self.users.exists_by_email(email).await? {
            errors.add("email", "User with this email already exists.");
        }
        Ok(())
    }

    async fn check_phone(
        &self,
        phone: Option<&str>,
        errors: &mut ValidationErrors,
    ) -> DomainResult<()> {
        let Some(phone) = phone else {
            errors.add("phone", "The phone number is required.");
            return Ok(());
        };

        if !is_valid_registration_phone(phone) {
            errors.add("phone", "The phone number format is invalid.");
        } else if self.users.exists_by_phone(phone).await? {
            errors.add("phone", "User with this phone already exists.");
        }
        Ok(())
    }

    async fn check_position(
        &self,
        position_id: Option<&str>,
        errors: &mut ValidationErrors,
    ) -> DomainResult<Option<i64>> {
        let Some(raw) = position_id else {
            errors.add("position_id", "The position id is required.");
            return Ok(None);
        };

        match raw.parse::<i64>() {
            Ok(id) if self.positions.exists(id).await? => Ok(Some(id)),
            _ => {
                errors.add("position_id", "The selected position id is invalid.");
                Ok(None)
            }
        }
    }
}

/// Trimmed value, `None` when absent or blank
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_name(name: Option<&str>, errors: &mut ValidationErrors) {
    let Some(name) = name else {
        errors.add("name", "The name is required.");
        return;
    };

    let len = name.chars().count();
    if len < NAME_MIN_CHARS {
        errors.add("name", "The name must be at least 2 characters.");
    } else if len > NAME_MAX_CHARS {
        errors.add("name", "The name may not be greater than 60 characters.");
    }
}

fn check_photo(photo: Option<&UploadedPhoto>, errors: &mut ValidationErrors) {
    let Some(photo) = photo else {
        errors.add("photo", "The photo is required.");
        return;
    };

    if photo.len() > PHOTO_MAX_BYTES {
        errors.add("photo", "The photo may not be greater than 5 Mbytes.");
    }

    let format = match image::guess_format(&photo.bytes) {
        Ok(format) => format,
        Err(_) => {
            errors.add("photo", "The photo must be an image.");
            errors.add("photo", "The photo must be a file of type: jpg, jpeg.");
            return;
        }
    };

    if format != ImageFormat::Jpeg {
        errors.add("photo", "The photo must be a file of type: jpg, jpeg.");
    }

    match ImageReader::with_format(Cursor::new(&photo.bytes), format).into_dimensions() {
        Ok((width, height)) => {
            if width < PHOTO_MIN_WIDTH || height < PHOTO_MIN_HEIGHT {
                errors.add("photo", "The photo must be at least 70px by 70px.");
            }
        }
        // A JPEG signature with an unreadable header is not a usable image
        Err(_) if format == ImageFormat::Jpeg => {
            errors.add("photo", "The photo must be an image.");
        }
        Err(_) => {}
    }
}
