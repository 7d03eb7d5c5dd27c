//! Configuration for the photo pipeline

use std::path::PathBuf;

use ud_shared::StorageConfig;

/// Sub-directory (in both areas) holding user photos
pub const PHOTO_DIRECTORY: &str = "photos";

/// Configuration for the photo pipeline
#[derive(Debug, Clone)]
pub struct PhotoPipelineConfig {
    /// Temporary area the upload is written to first
    pub private_dir: PathBuf,
    /// Area served to clients under `/storage`
    pub public_dir: PathBuf,
    /// Target crop width
    pub width: u32,
    /// Target crop height
    pub height: u32,
}

impl Default for PhotoPipelineConfig {
    fn default() -> Self {
        Self::from(&StorageConfig::default())
    }
}

impl From<&StorageConfig> for PhotoPipelineConfig {
    fn from(storage: &StorageConfig) -> Self {
        Self {
            private_dir: storage.private_dir.clone(),
            public_dir: storage.public_dir.clone(),
            width: storage.photo_width,
            height: storage.photo_height,
        }
    }
}

impl PhotoPipelineConfig {
    pub fn private_photo_dir(&self) -> PathBuf {
        self.private_dir.join(PHOTO_DIRECTORY)
    }

    pub fn public_photo_dir(&self) -> PathBuf {
        self.public_dir.join(PHOTO_DIRECTORY)
    }
}
