//! Domain-specific error types and error handling.

mod types;


pub use types::{AdmissionError, ProcessingError, ValidationError};

use thiserror::Error;
use ud_shared::ValidationErrors;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Unexpected repository or IO failure outside the registration stages
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Admission(#[from] AdmissionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    pub fn parameter(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::Validation(ValidationError::Parameter {
            field: field.into(),
            message: message.into(),
        })
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(ValidationError::Fields(errors))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
