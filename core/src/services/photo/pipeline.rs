//! Store, optimize and publish uploaded photos

use std::io;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{DomainResult, ProcessingError};

use super::compensation::{Compensation, CompensationStack};
use super::config::{PhotoPipelineConfig, PHOTO_DIRECTORY};
use super::traits::ImageTransformer;
use super::types::{StoredPhoto, UploadedPhoto};

/// Three-stage photo pipeline: private write, cover crop, public relocation
pub struct PhotoPipeline {
    transformer: Arc<dyn ImageTransformer>,
    config: PhotoPipelineConfig,
}

impl PhotoPipeline {
    /// Create a new photo pipeline
    ///
    /// # Arguments
    ///
    /// * `transformer` - External image optimization service
    /// * `config` - Storage areas and crop dimensions
    pub fn new(transformer: Arc<dyn ImageTransformer>, config: PhotoPipelineConfig) -> Self {
        Self { transformer, config }
    }

    pub fn config(&self) -> &PhotoPipelineConfig {
        &self.config
    }

    /// Persist, crop and publish an uploaded photo
    ///
    /// 1. Writes the bytes to `<private>/photos/<uuid>.<ext>`. A failed write
    ///    removes whatever part of the file reached the disk.
    /// 2. Asks the transformer for a cover crop in place. On failure the
    ///    private file is removed before the error is returned.
    /// 3. Moves the file to `<public>/photos/<uuid>.<ext>`, creating the
    ///    directory if needed. A failure here is fatal and the private file
    ///    is left where it is.
    ///
    /// # Returns
    ///
    /// * `Ok(StoredPhoto)` - The relative reference `photos/<uuid>.<ext>` and
    ///   the public file path
    /// * `Err(DomainError::Processing)` - The failed stage with the original message
    pub async fn store_and_optimize(&self, upload: &UploadedPhoto) -> DomainResult<StoredPhoto> {
        let file_name = format!("{}.{}", Uuid::new_v4().simple(), upload.extension());
        let private_path = self.config.private_photo_dir().join(&file_name);
        let public_path = self.config.public_photo_dir().join(&file_name);

        let mut compensation = CompensationStack::new();

        // Stage 1: private write, undo registered up front to cover partial writes
        compensation.push(Compensation::RemoveFile(private_path.clone()));
        if let Err(e) = write_file(&private_path, &upload.bytes).await {
            compensation.unwind().await;
            tracing::error!(
                path = %private_path.display(),
                error = %e,
                event = "photo_pipeline_failed",
                stage = "store",
                "Failed to store uploaded photo"
            );
            return Err(ProcessingError::PhotoStorage {
                message: e.to_string(),
            }
            .into());
        }

        // Stage 2: cover crop through the external service
        if let Err(message) = self
            .transformer
            .cover(&private_path, self.config.width, self.config.height)
            .await
        {
            tracing::error!(
                path = %private_path.display(),
                error = %message,
                event = "photo_pipeline_failed",
                stage = "optimize",
                "Image optimization failed"
            );
            compensation.unwind().await;
            return Err(ProcessingError::PhotoOptimization { message }.into());
        }

        // Stage 3: relocation is treated as fatal, not rolled back
        compensation.commit();
        if let Err(e) = relocate(&private_path, &public_path).await {
            tracing::error!(
                from = %private_path.display(),
                to = %public_path.display(),
                error = %e,
                event = "photo_pipeline_failed",
                stage = "relocate",
                "Failed to move photo to public storage"
            );
            return Err(ProcessingError::PhotoRelocation {
                message: e.to_string(),
            }
            .into());
        }

        tracing::info!(
            file = %file_name,
            bytes = upload.len(),
            event = "photo_stored",
            "Photo stored and optimized"
        );

        Ok(StoredPhoto {
            reference: format!("{}/{}", PHOTO_DIRECTORY, file_name),
            public_path,
        })
    }

    /// Remove a published photo that ended up referenced by nothing
    pub async fn discard(&self, photo: &StoredPhoto) {
        let mut compensation = CompensationStack::new();
        compensation.push(Compensation::RemoveFile(photo.public_path.clone()));
        compensation.unwind().await;
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await
}

/// Move `from` to `to`, falling back to copy + remove across filesystems
async fn relocate(from: &Path, to: &Path) -> io::Result<()> {
    if let Some(parent) = to.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    match tokio::fs::rename(from, to).await {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            tracing::debug!(error = %rename_err, "rename failed, copying instead");
            tokio::fs::copy(from, to).await?;
            tokio::fs::remove_file(from).await
        }
    }
}
