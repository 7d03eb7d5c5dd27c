//! Photo storage configuration module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::env_or;

/// Where uploaded photos live and what size they are cropped to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Temporary area, never served over HTTP
    pub private_dir: PathBuf,

    /// Publicly served area, mounted at `/storage`
    pub public_dir: PathBuf,

    /// Target width of the cover crop
    pub photo_width: u32,

    /// Target height of the cover crop
    pub photo_height: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            private_dir: PathBuf::from("storage/app/private"),
            public_dir: PathBuf::from("storage/app/public"),
            photo_width: 70,
            photo_height: 70,
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            private_dir: std::env::var("STORAGE_PRIVATE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.private_dir),
            public_dir: std::env::var("STORAGE_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            photo_width: env_or("PHOTO_WIDTH", defaults.photo_width),
            photo_height: env_or("PHOTO_HEIGHT", defaults.photo_height),
        }
    }

    /// Both areas rooted under a single directory (used by tests)
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            private_dir: root.join("private"),
            public_dir: root.join("public"),
            ..Default::default()
        }
    }
}
