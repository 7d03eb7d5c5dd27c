//! Business services containing domain logic and use cases.

pub mod directory;
pub mod photo;
pub mod registration;
pub mod token;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use directory::{DirectoryService, UsersQuery};
pub use photo::{
    FakeImageTransformer, ImageTransformer, PhotoPipeline, PhotoPipelineConfig, StoredPhoto,
    UploadedPhoto,
};
pub use registration::{RegistrationCandidate, RegistrationService, RegistrationServiceConfig};
pub use token::{InMemoryTokenStore, TokenStore, TokenStoreConfig};
