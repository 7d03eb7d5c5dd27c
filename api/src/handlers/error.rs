//! Conversion of domain failures into HTTP responses
//!
//! Every error body has the shape `{success:false, message, error?, errors?}`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use ud_core::errors::{AdmissionError, DomainError, ValidationError};
use ud_shared::ErrorResponse;

/// Message returned for unexpected failures; details stay in the logs
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Errors returned by request handlers and middleware
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request body could not be read as multipart form data
    #[error("{0}")]
    MalformedBody(String),

    /// The request body exceeds the configured limit
    #[error("The request payload is too large.")]
    PayloadTooLarge,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => domain_status(error),
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            ApiError::Domain(error) => domain_body(error),
            other => ErrorResponse::new(other.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = ?self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), message = %body.message, "Request rejected");
        }

        HttpResponse::build(status).json(body)
    }
}

fn domain_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Admission(AdmissionError::MissingToken) => StatusCode::BAD_REQUEST,
        DomainError::Admission(AdmissionError::InvalidOrExpiredToken) => StatusCode::FORBIDDEN,
        DomainError::Validation(ValidationError::Parameter { .. }) => StatusCode::BAD_REQUEST,
        DomainError::Validation(ValidationError::Fields(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Processing(_) | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn domain_body(error: &DomainError) -> ErrorResponse {
    match error {
        DomainError::Validation(ValidationError::Fields(fields)) => {
            ErrorResponse::new(error.to_string()).with_errors(fields.clone().into_field_errors())
        }
        DomainError::Processing(processing) => {
            ErrorResponse::new(processing.to_string()).with_error(processing.detail())
        }
        DomainError::Internal { .. } => ErrorResponse::new(INTERNAL_ERROR_MESSAGE),
        _ => ErrorResponse::new(error.to_string()),
    }
}
