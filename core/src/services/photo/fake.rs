//! In-process stand-in for the image optimization service

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::traits::ImageTransformer;

/// Records each call and succeeds without touching the file, unless a
/// failure message has been set.
#[derive(Debug, Default)]
pub struct FakeImageTransformer {
    failure: Mutex<Option<String>>,
    calls: Mutex<Vec<(PathBuf, u32, u32)>>,
}

impl FakeImageTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transformer whose every call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        let fake = Self::default();
        fake.set_failure(Some(message.into()));
        fake
    }

    pub fn set_failure(&self, message: Option<String>) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = message;
    }

    /// Paths and dimensions passed to `cover`, oldest first
    pub fn calls(&self) -> Vec<(PathBuf, u32, u32)> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait]
impl ImageTransformer for FakeImageTransformer {
    async fn cover(&self, path: &Path, width: u32, height: u32) -> Result<(), String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path.to_path_buf(), width, height));

        let failure = self.failure.lock().unwrap_or_else(PoisonError::into_inner).clone();
        match failure {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }
}
