//! Configuration for the registration service

/// Configuration for the registration service
#[derive(Debug, Clone)]
pub struct RegistrationServiceConfig {
    /// Delete the published photo when the user insert fails afterwards
    pub discard_orphaned_photos: bool,
}

impl Default for RegistrationServiceConfig {
    fn default() -> Self {
        Self {
            discard_orphaned_photos: true,
        }
    }
}
