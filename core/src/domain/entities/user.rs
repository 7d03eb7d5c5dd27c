//! User entity representing a registered member of the directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Photo reference given to seeded users
pub const DEFAULT_PHOTO: &str = "images/default.jpg";

/// User entity as read back from the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the store on creation
    pub id: i64,

    /// Display name (2 to 60 characters)
    pub name: String,

    /// Unique email address
    pub email: String,

    /// Unique phone number, `+380` followed by nine digits
    pub phone: String,

    /// Referenced position, `None` when the row carries a NULL reference
    pub position_id: Option<i64>,

    /// Name of the referenced position, `None` if it was removed
    pub position: Option<String>,

    /// Relative photo reference, e.g. `photos/<name>.jpg`
    pub photo: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Unix timestamp of registration, as shown to clients
    pub fn registration_timestamp(&self) -> i64 {
        self.created_at.timestamp()
    }

    /// Public URL of the photo under `<base_url>/storage/`
    pub fn photo_url(&self, base_url: &str) -> String {
        format!(
            "{}/storage/{}",
            base_url.trim_end_matches('/'),
            self.photo.trim_start_matches('/')
        )
    }
}

/// Validated fields for a user row about to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position_id: i64,
    pub photo: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        position_id: i64,
        photo: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            position_id,
            photo: photo.into(),
        }
    }

    /// Materializes the row with the identifier and timestamp assigned by the store
    pub fn into_user(self, id: i64, position: Option<String>, created_at: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            position_id: Some(self.position_id),
            position,
            photo: self.photo,
            created_at,
        }
    }
}
