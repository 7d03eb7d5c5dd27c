//! Token store configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Registration tokens live for 40 minutes after issuance
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 40;

/// Backend holding the single live registration token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStoreDriver {
    /// Process-local slot guarded by a mutex
    #[default]
    Memory,
    /// Shared `registration_token` key in Redis
    Redis,
}

impl std::str::FromStr for TokenStoreDriver {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "array" => Ok(TokenStoreDriver::Memory),
            "redis" => Ok(TokenStoreDriver::Redis),
            _ => Err(format!("Invalid token store driver: {}", s)),
        }
    }
}

/// Token store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Which backend keeps the token slot
    #[serde(default)]
    pub driver: TokenStoreDriver,

    /// Redis connection URL (used by the redis driver only)
    pub url: String,

    /// Lifetime of a minted registration token
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            driver: TokenStoreDriver::Memory,
            url: String::from("redis://localhost:6379"),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        Self {
            driver: env_or("TOKEN_STORE", TokenStoreDriver::Memory),
            url,
            token_ttl_minutes: env_or("TOKEN_TTL_MINUTES", DEFAULT_TOKEN_TTL_MINUTES),
        }
    }

    /// Token lifetime in seconds, as expected by `SET ... EX`
    pub fn token_ttl_seconds(&self) -> u64 {
        u64::try_from(self.token_ttl_minutes.max(1)).unwrap_or(1) * 60
    }
}

fn default_token_ttl() -> i64 {
    DEFAULT_TOKEN_TTL_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_parsing() {
        assert_eq!("redis".parse::<TokenStoreDriver>(), Ok(TokenStoreDriver::Redis));
        assert_eq!("Memory".parse::<TokenStoreDriver>(), Ok(TokenStoreDriver::Memory));
        assert!("memcached".parse::<TokenStoreDriver>().is_err());
    }

    #[test]
    fn test_token_ttl_seconds() {
        let config = CacheConfig::default();
        assert_eq!(config.token_ttl_seconds(), 2400);
    }
}
