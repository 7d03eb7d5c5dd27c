//! Registration input types

use crate::services::photo::UploadedPhoto;

/// Raw registration fields exactly as received; every field may be missing
#[derive(Debug, Clone, Default)]
pub struct RegistrationCandidate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Kept as text so a non-numeric value is reported as a validation failure
    pub position_id: Option<String>,
    pub photo: Option<UploadedPhoto>,
}

/// Fields that passed every rule
#[derive(Debug, Clone)]
pub struct ValidatedRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position_id: i64,
    pub photo: UploadedPhoto,
}
