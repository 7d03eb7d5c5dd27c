//! Job position entity.

use serde::{Deserialize, Serialize};

/// Fixed set of positions seeded into every installation
pub const DEFAULT_POSITIONS: &[(i64, &str)] = &[
    (1, "Lawyer"),
    (2, "Content manager"),
    (3, "Security"),
    (4, "Designer"),
];

/// A job position users can be registered under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: i64,
    pub name: String,
}

impl Position {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The seeded positions as entities
    pub fn defaults() -> Vec<Position> {
        DEFAULT_POSITIONS
            .iter()
            .map(|(id, name)| Position::new(*id, *name))
            .collect()
    }
}
