//! Shared error response structure

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Uniform error body returned by every endpoint:
/// `{success:false, message, error?, errors?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,

    /// Human-readable summary of what went wrong
    pub message: String,

    /// Underlying diagnostic message (processing failures only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Field → messages map (validation failures only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
            errors: None,
        }
    }

    /// Attach the original diagnostic message
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Attach the structured field errors
    pub fn with_errors(mut self, errors: BTreeMap<String, Vec<String>>) -> Self {
        self.errors = Some(errors);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_members_are_omitted() {
        let body = serde_json::to_value(ErrorResponse::new("User not found")).unwrap();
        assert_eq!(body, serde_json::json!({"success": false, "message": "User not found"}));
    }

    #[test]
    fn test_field_errors_are_rendered() {
        let mut errors = BTreeMap::new();
        errors.insert("name".to_string(), vec!["The name is required.".to_string()]);

        let body = serde_json::to_value(
            ErrorResponse::new("Validation failed").with_errors(errors),
        )
        .unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["errors"]["name"][0], "The name is required.");
        assert!(body.get("error").is_none());
    }
}
