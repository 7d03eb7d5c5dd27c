//! Photo pipeline input and output types

use std::path::PathBuf;

/// A photo as received in the multipart body
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedPhoto {
    /// Client-side file name, if one was sent
    pub original_name: Option<String>,
    /// Declared content type, if one was sent
    pub content_type: Option<String>,
    /// Raw file bytes
    pub bytes: Vec<u8>,
}

impl UploadedPhoto {
    pub fn new(original_name: Option<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            original_name,
            content_type,
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lower-cased extension of the original name when it looks sane,
    /// `jpg` otherwise
    pub fn extension(&self) -> String {
        self.original_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_else(|| String::from("jpg"))
    }
}

impl std::fmt::Debug for UploadedPhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedPhoto")
            .field("original_name", &self.original_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A processed photo reachable at its public location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPhoto {
    /// Relative reference persisted on the user, e.g. `photos/<name>.jpg`
    pub reference: String,
    /// Absolute or working-directory relative path of the public file
    pub public_path: PathBuf,
}
