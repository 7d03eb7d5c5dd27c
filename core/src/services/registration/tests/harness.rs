//! Wiring shared by the registration tests

use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use crate::repositories::{InMemoryPositionRepository, InMemoryUserRepository};
use crate::services::photo::{FakeImageTransformer, PhotoPipeline, PhotoPipelineConfig, UploadedPhoto};
use crate::services::registration::{
    RegistrationCandidate, RegistrationService, RegistrationServiceConfig,
};
use crate::services::test_support::jpeg_bytes;
use crate::services::token::InMemoryTokenStore;

pub struct Harness {
    pub service: RegistrationService,
    pub tokens: Arc<InMemoryTokenStore>,
    pub users: Arc<InMemoryUserRepository>,
    pub positions: Arc<InMemoryPositionRepository>,
    pub transformer: Arc<FakeImageTransformer>,
    pub photos: PhotoPipelineConfig,
    _root: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(RegistrationServiceConfig::default())
    }

    pub fn with_config(config: RegistrationServiceConfig) -> Self {
        let root = TempDir::new().unwrap();
        let photos = PhotoPipelineConfig {
            private_dir: root.path().join("private"),
            public_dir: root.path().join("public"),
            width: 70,
            height: 70,
        };

        let tokens = Arc::new(InMemoryTokenStore::new());
        let positions = Arc::new(InMemoryPositionRepository::seeded());
        let users = Arc::new(InMemoryUserRepository::with_positions(positions.clone()));
        let transformer = Arc::new(FakeImageTransformer::new());
        let pipeline = Arc::new(PhotoPipeline::new(transformer.clone(), photos.clone()));

        let service = RegistrationService::new(
            tokens.clone(),
            users.clone(),
            positions.clone(),
            pipeline,
            config,
        );

        Self {
            service,
            tokens,
            users,
            positions,
            transformer,
            photos,
            _root: root,
        }
    }

    pub fn private_files(&self) -> usize {
        count_files(&self.photos.private_photo_dir())
    }

    pub fn public_files(&self) -> usize {
        count_files(&self.photos.public_photo_dir())
    }
}

fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

pub fn photo(width: u32, height: u32) -> UploadedPhoto {
    UploadedPhoto::new(
        Some("avatar.jpg".to_string()),
        Some("image/jpeg".to_string()),
        jpeg_bytes(width, height),
    )
}

pub fn candidate(n: u32) -> RegistrationCandidate {
    RegistrationCandidate {
        name: Some(format!("User Number {}", n)),
        email: Some(format!("user{}@example.com", n)),
        phone: Some(format!("+380{:09}", n)),
        position_id: Some("2".to_string()),
        photo: Some(photo(100, 120)),
    }
}
