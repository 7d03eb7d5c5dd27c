//! Tinify image transformer
//!
//! Two round trips per photo: the raw bytes are uploaded to the shrink
//! endpoint, then the `Location` it returns is asked for a "cover" resize.
//! The resized bytes replace the file on disk.

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use ud_core::services::photo::ImageTransformer;
use ud_shared::ImageServiceConfig;

use crate::InfrastructureError;

/// Basic auth user name expected by the API; the key is the password
const API_USER: &str = "api";

#[derive(Debug, Serialize)]
struct ResizeRequest {
    resize: ResizeOptions,
}

#[derive(Debug, Serialize)]
struct ResizeOptions {
    method: &'static str,
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// `ImageTransformer` backed by the Tinify HTTP API
#[derive(Clone)]
pub struct TinifyImageTransformer {
    http: Client,
    api_key: String,
    shrink_url: Url,
}

impl std::fmt::Debug for TinifyImageTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TinifyImageTransformer")
            .field("shrink_url", &self.shrink_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl TinifyImageTransformer {
    /// Build the client
    ///
    /// # Errors
    /// `InfrastructureError::Config` when the API key is missing or the
    /// endpoint is not a valid URL. The server refuses to start in that case.
    pub fn new(config: &ImageServiceConfig) -> Result<Self, InfrastructureError> {
        if !config.is_configured() {
            return Err(InfrastructureError::Config(
                "Tinify API key is missing (set TINIFY_API_KEY)".to_string(),
            ));
        }

        let shrink_url = Url::parse(&config.api_url).map_err(|e| {
            InfrastructureError::Config(format!("Invalid Tinify API URL: {}", e))
        })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.trim().to_string(),
            shrink_url,
        })
    }

    /// Upload the source image and return the URL of the compressed result
    async fn shrink(&self, bytes: Vec<u8>) -> Result<Url, InfrastructureError> {
        let response = self
            .http
            .post(self.shrink_url.clone())
            .basic_auth(API_USER, Some(&self.api_key))
            .body(bytes)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                InfrastructureError::ImageService("Response is missing the Location header".into())
            })?;

        self.shrink_url.join(location).map_err(|e| {
            InfrastructureError::ImageService(format!("Invalid output location: {}", e))
        })
    }

    /// Ask for a cover-mode resize of a previously shrunk image
    async fn resize(
        &self,
        output: Url,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, InfrastructureError> {
        let request = ResizeRequest {
            resize: ResizeOptions {
                method: "cover",
                width,
                height,
            },
        };

        let response = self
            .http
            .post(output)
            .basic_auth(API_USER, Some(&self.api_key))
            .json(&request)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        Ok(response.bytes().await?.to_vec())
    }

    async fn ensure_success(response: Response) -> Result<Response, InfrastructureError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(ApiErrorBody {
                message: Some(message),
                ..
            }) => message,
            Ok(ApiErrorBody {
                error: Some(error), ..
            }) => error,
            _ => format!("HTTP {}", status.as_u16()),
        };

        Err(InfrastructureError::ImageService(detail))
    }

    async fn transform(&self, path: &Path, width: u32, height: u32) -> Result<(), InfrastructureError> {
        let source = tokio::fs::read(path).await?;
        let input_size = source.len();

        let output = self.shrink(source).await?;
        let resized = self.resize(output, width, height).await?;
        tokio::fs::write(path, &resized).await?;

        tracing::info!(
            path = %path.display(),
            input_size,
            output_size = resized.len(),
            width,
            height,
            "Photo cropped and optimized"
        );
        Ok(())
    }
}

#[async_trait]
impl ImageTransformer for TinifyImageTransformer {
    async fn cover(&self, path: &Path, width: u32, height: u32) -> Result<(), String> {
        self.transform(path, width, height).await.map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Image optimization failed");
            format!("Error during image processing: {}", e)
        })
    }
}
