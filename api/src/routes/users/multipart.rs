//! Multipart body parsing for registration

use actix_multipart::{Multipart, MultipartError};
use actix_web::{http::header::CONTENT_TYPE, web, HttpRequest};
use futures_util::TryStreamExt;

use ud_core::services::photo::UploadedPhoto;
use ud_core::services::RegistrationCandidate;

use crate::handlers::error::ApiError;

/// Read the registration fields from a multipart body
///
/// Unknown fields are ignored. A body that is not `multipart/form-data`
/// yields an empty candidate so every field is reported as required.
/// The whole body is capped at `limit` bytes.
pub async fn read_candidate(
    req: &HttpRequest,
    payload: web::Payload,
    limit: usize,
) -> Result<RegistrationCandidate, ApiError> {
    let mut candidate = RegistrationCandidate::default();
    if !is_multipart(req) {
        return Ok(candidate);
    }

    let mut multipart = Multipart::new(req.headers(), payload);
    let mut total = 0usize;

    while let Some(mut field) = multipart.try_next().await.map_err(malformed)? {
        let disposition = field.content_disposition();
        let name = disposition.get_name().unwrap_or_default().to_string();
        let filename = disposition.get_filename().map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(malformed)? {
            total += chunk.len();
            if total > limit {
                return Err(ApiError::PayloadTooLarge);
            }
            bytes.extend_from_slice(&chunk);
        }

        match name.as_str() {
            "name" => candidate.name = Some(text(bytes)),
            "email" => candidate.email = Some(text(bytes)),
            "phone" => candidate.phone = Some(text(bytes)),
            "position_id" => candidate.position_id = Some(text(bytes)),
            "photo" => candidate.photo = Some(UploadedPhoto::new(filename, content_type, bytes)),
            _ => {}
        }
    }

    Ok(candidate)
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

fn malformed(e: MultipartError) -> ApiError {
    tracing::debug!(error = %e, "Malformed multipart body");
    ApiError::MalformedBody("The request body must be valid multipart form data.".to_string())
}
