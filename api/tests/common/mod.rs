//! Shared wiring for the HTTP tests: in-memory repositories, the fake image
//! transformer and a temporary storage root.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use actix_web::web;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tempfile::TempDir;

use ud_api::AppState;
use ud_core::domain::NewUser;
use ud_core::repositories::{InMemoryPositionRepository, InMemoryUserRepository, UserRepository};
use ud_core::services::photo::{FakeImageTransformer, PhotoPipeline, PhotoPipelineConfig};
use ud_core::services::{
    DirectoryService, InMemoryTokenStore, RegistrationService, RegistrationServiceConfig,
};
use ud_shared::ServerConfig;

pub const APP_URL: &str = "http://test.local";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub users: Arc<InMemoryUserRepository>,
    pub positions: Arc<InMemoryPositionRepository>,
    pub tokens: Arc<InMemoryTokenStore>,
    pub transformer: Arc<FakeImageTransformer>,
    pub photos: PhotoPipelineConfig,
    _root: TempDir,
}

impl TestContext {
    /// Context with the four default positions and no users
    pub fn new() -> Self {
        Self::with_positions(InMemoryPositionRepository::seeded())
    }

    pub fn with_positions(positions: InMemoryPositionRepository) -> Self {
        let root = TempDir::new().unwrap();
        let photos = PhotoPipelineConfig {
            private_dir: root.path().join("private"),
            public_dir: root.path().join("public"),
            width: 70,
            height: 70,
        };
        std::fs::create_dir_all(photos.public_photo_dir()).unwrap();

        let positions = Arc::new(positions);
        let users = Arc::new(InMemoryUserRepository::with_positions(positions.clone()));
        let tokens = Arc::new(InMemoryTokenStore::new());
        let transformer = Arc::new(FakeImageTransformer::new());
        let pipeline = Arc::new(PhotoPipeline::new(transformer.clone(), photos.clone()));

        let registration = Arc::new(RegistrationService::new(
            tokens.clone(),
            users.clone(),
            positions.clone(),
            pipeline,
            RegistrationServiceConfig::default(),
        ));
        let directory = Arc::new(DirectoryService::new(users.clone(), positions.clone()));

        let server = ServerConfig::default().with_app_url(APP_URL);
        let state = web::Data::new(AppState::new(
            registration,
            directory,
            tokens.clone(),
            &server,
            photos.public_dir.clone(),
        ));

        Self {
            state,
            users,
            positions,
            tokens,
            transformer,
            photos,
            _root: root,
        }
    }

    /// Insert `n` users directly, numbered from 1
    pub async fn seed_users(&self, n: u32) {
        for i in 1..=n {
            self.users
                .create(NewUser::new(
                    format!("Seeded User {}", i),
                    format!("seeded{}@example.com", i),
                    format!("+380{:09}", 500_000_000 + i),
                    i64::from(i % 4 + 1),
                    "images/default.jpg",
                ))
                .await
                .unwrap();
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

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([40, 90, 160]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageFormat::Jpeg)
        .unwrap();
    buf.into_inner()
}

/// Hand-built `multipart/form-data` body
pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "----ud-test-boundary-7MA4YWxkTrZu0gW".to_string(),
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                self.boundary, name, filename, content_type
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Content type header value and the finished body
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}

/// A complete, valid registration form for user number `n`
pub fn registration_form(n: u32) -> MultipartBody {
    MultipartBody::new()
        .text("name", &format!("Registrant {}", n))
        .text("email", &format!("registrant{}@example.com", n))
        .text("phone", &format!("+380{:09}", 100_000_000 + n))
        .text("position_id", "3")
        .file("photo", "avatar.jpg", "image/jpeg", &jpeg_bytes(120, 90))
}
