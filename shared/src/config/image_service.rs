//! Image optimization service configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Credentials and endpoint of the external image optimization API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageServiceConfig {
    /// API key, sent as the password of HTTP basic auth
    pub api_key: String,

    /// Endpoint accepting the raw image upload
    pub api_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ImageServiceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: String::from("https://api.tinify.com/shrink"),
            timeout_secs: 30,
        }
    }
}

impl ImageServiceConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("TINIFY_API_KEY").unwrap_or_default(),
            api_url: std::env::var("TINIFY_API_URL").unwrap_or(defaults.api_url),
            timeout_secs: env_or("TINIFY_TIMEOUT_SECS", defaults.timeout_secs),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
