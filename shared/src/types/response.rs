//! API response wrappers

use serde::{Deserialize, Serialize};

/// Success envelope: `{"success": true, ...payload}`
///
/// The payload is flattened so each endpoint controls its own top-level
/// members (`token`, `positions`, `user`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Endpoint specific members
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: String::from("healthy"),
            service: service.into(),
            version: version.into(),
        }
    }
}
