//! Error categories raised by the registration workflow and directory queries
//!
//! The `Display` text of each variant is the message shown to API clients.
//! Diagnostic detail (the underlying IO, HTTP or database message) is kept
//! separately and only surfaced where the response contract allows it.

use thiserror::Error;
use ud_shared::ValidationErrors;

/// Admission failures for the bearer-token gate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdmissionError {
    /// No `Authorization: Bearer` credential was presented
    #[error("Token is required.")]
    MissingToken,

    /// A credential was presented but does not match the live token
    #[error("Invalid or expired token.")]
    InvalidOrExpiredToken,
}

/// Input validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more body/query fields failed their rules
    #[error("Validation failed")]
    Fields(ValidationErrors),

    /// A single malformed path parameter
    #[error("{message}")]
    Parameter { field: String, message: String },
}

impl ValidationError {
    /// Field errors when this is a `Fields` failure
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ValidationError::Fields(errors) => Some(errors),
            ValidationError::Parameter { .. } => None,
        }
    }
}

/// Failures after validation passed, while storing the photo or the user row
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("Failed to upload and optimize photo.")]
    PhotoStorage { message: String },

    #[error("Failed to upload and optimize photo.")]
    PhotoOptimization { message: String },

    #[error("Failed to upload and optimize photo.")]
    PhotoRelocation { message: String },

    #[error("An error occurred while processing the request.")]
    Persistence { message: String },
}

impl ProcessingError {
    /// The underlying message retained for diagnostics
    pub fn detail(&self) -> &str {
        match self {
            ProcessingError::PhotoStorage { message }
            | ProcessingError::PhotoOptimization { message }
            | ProcessingError::PhotoRelocation { message }
            | ProcessingError::Persistence { message } => message,
        }
    }

    /// Short stage label used in structured logs
    pub fn stage(&self) -> &'static str {
        match self {
            ProcessingError::PhotoStorage { .. } => "photo_storage",
            ProcessingError::PhotoOptimization { .. } => "photo_optimization",
            ProcessingError::PhotoRelocation { .. } => "photo_relocation",
            ProcessingError::Persistence { .. } => "persistence",
        }
    }
}
