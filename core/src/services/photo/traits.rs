//! Trait for the external image transformation service

use async_trait::async_trait;
use std::path::Path;

/// Narrow contract of the image optimization service
#[async_trait]
pub trait ImageTransformer: Send + Sync {
    /// Crop and resize the image at `path` to exactly `width`×`height`
    /// ("cover" mode), writing the result back over the same file.
    ///
    /// The error string is the service's own message, kept for diagnostics.
    async fn cover(&self, path: &Path, width: u32, height: u32) -> Result<(), String>;
}
