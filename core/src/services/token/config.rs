//! Configuration for the token store

use chrono::Duration;

use crate::domain::entities::admission_token::TOKEN_TTL_MINUTES;

/// Configuration for the token store
#[derive(Debug, Clone)]
pub struct TokenStoreConfig {
    /// Number of minutes a minted token stays valid
    pub ttl_minutes: i64,
}

impl Default for TokenStoreConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: TOKEN_TTL_MINUTES,
        }
    }
}

impl TokenStoreConfig {
    pub fn ttl(&self) -> Duration {
        Duration::minutes(self.ttl_minutes.max(1))
    }
}
