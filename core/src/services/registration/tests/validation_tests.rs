//! Unit tests for registration field rules

use crate::errors::{DomainError, ValidationError};
use crate::services::photo::UploadedPhoto;
use crate::services::registration::{RegistrationCandidate, PHOTO_MAX_BYTES};
use crate::services::test_support::png_bytes;
use crate::services::token::TokenStore;
use ud_shared::ValidationErrors;

use super::harness::{candidate, photo, Harness};

async fn field_errors(candidate: RegistrationCandidate) -> ValidationErrors {
    let h = Harness::new();
    let token = h.tokens.mint().await.unwrap();
    match h.service.register(candidate, Some(&token)).await {
        Err(DomainError::Validation(ValidationError::Fields(errors))) => {
            assert!(h.users.is_empty().await);
            assert_eq!(h.transformer.call_count(), 0);
            errors
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_all_missing_fields_are_reported_together() {
    let errors = field_errors(RegistrationCandidate::default()).await;

    assert_eq!(errors.messages("name"), ["The name is required."]);
    assert_eq!(errors.messages("email"), ["The email is required."]);
    assert_eq!(errors.messages("phone"), ["The phone number is required."]);
    assert_eq!(errors.messages("position_id"), ["The position id is required."]);
    assert_eq!(errors.messages("photo"), ["The photo is required."]);
}

#[tokio::test]
async fn test_blank_values_count_as_missing() {
    let mut c = candidate(1);
    c.name = Some("   ".to_string());
    c.photo = Some(UploadedPhoto::new(Some("a.jpg".to_string()), None, Vec::new()));

    let errors = field_errors(c).await;
    assert_eq!(errors.messages("name"), ["The name is required."]);
    assert_eq!(errors.messages("photo"), ["The photo is required."]);
    assert!(!errors.contains("email"));
}

#[tokio::test]
async fn test_name_length_bounds() {
    let mut short = candidate(1);
    short.name = Some("J".to_string());
    assert_eq!(
        field_errors(short).await.messages("name"),
        ["The name must be at least 2 characters."]
    );

    let mut long = candidate(1);
    long.name = Some("x".repeat(61));
    assert_eq!(
        field_errors(long).await.messages("name"),
        ["The name may not be greater than 60 characters."]
    );
}

#[tokio::test]
async fn test_name_length_counts_characters() {
    let h = Harness::new();
    let token = h.tokens.mint().await.unwrap();
    let mut c = candidate(1);
    // 60 two-byte characters
    c.name = Some("ї".repeat(60));

    assert!(h.service.register(c, Some(&token)).await.is_ok());
}

#[tokio::test]
async fn test_email_and_phone_format() {
    let mut c = candidate(1);
    c.email = Some("not-an-email".to_string());
    c.phone = Some("+38050123456".to_string());

    let errors = field_errors(c).await;
    assert_eq!(errors.messages("email"), ["The email must be a valid email address."]);
    assert_eq!(errors.messages("phone"), ["The phone number format is invalid."]);
}

#[tokio::test]
async fn test_position_must_exist() {
    for raw in ["9", "abc", "-1", "1.5"] {
        let mut c = candidate(1);
        c.position_id = Some(raw.to_string());
        assert_eq!(
            field_errors(c).await.messages("position_id"),
            ["The selected position id is invalid."],
            "position_id = {}",
            raw
        );
    }
}

#[tokio::test]
async fn test_photo_must_be_jpeg() {
    let mut c = candidate(1);
    c.photo = Some(UploadedPhoto::new(
        Some("a.png".to_string()),
        Some("image/png".to_string()),
        png_bytes(100, 100),
    ));

    assert_eq!(
        field_errors(c).await.messages("photo"),
        ["The photo must be a file of type: jpg, jpeg."]
    );
}

#[tokio::test]
async fn test_photo_must_be_an_image() {
    let mut c = candidate(1);
    c.photo = Some(UploadedPhoto::new(
        Some("a.jpg".to_string()),
        None,
        b"definitely not an image".to_vec(),
    ));

    assert_eq!(
        field_errors(c).await.messages("photo"),
        [
            "The photo must be an image.",
            "The photo must be a file of type: jpg, jpeg."
        ]
    );
}

#[tokio::test]
async fn test_photo_minimum_dimensions() {
    for (w, h) in [(69, 100), (100, 69), (10, 10)] {
        let mut c = candidate(1);
        c.photo = Some(photo(w, h));
        assert_eq!(
            field_errors(c).await.messages("photo"),
            ["The photo must be at least 70px by 70px."]
        );
    }
}

#[tokio::test]
async fn test_photo_exactly_minimum_is_accepted() {
    let h = Harness::new();
    let token = h.tokens.mint().await.unwrap();
    let mut c = candidate(1);
    c.photo = Some(photo(70, 70));

    assert!(h.service.register(c, Some(&token)).await.is_ok());
}

#[tokio::test]
async fn test_photo_size_limit() {
    let mut c = candidate(1);
    let mut bytes = photo(100, 100).bytes;
    // Trailing bytes after the JPEG end marker do not affect decoding
    bytes.resize(PHOTO_MAX_BYTES + 1, 0);
    c.photo = Some(UploadedPhoto::new(Some("big.jpg".to_string()), None, bytes));

    assert_eq!(
        field_errors(c).await.messages("photo"),
        ["The photo may not be greater than 5 Mbytes."]
    );
}
