//! Redis-backed registration token slot
//!
//! Every API instance shares the single `registration_token` key, so a token
//! minted by one instance admits registrations on all of them. Expiry is
//! delegated to the key's TTL.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use constant_time_eq::constant_time_eq;

use ud_core::domain::entities::admission_token::AdmissionToken;
use ud_core::errors::DomainError;
use ud_core::services::TokenStore;
use ud_shared::CacheConfig;

use super::RedisClient;

/// Key holding the live registration token
pub const TOKEN_KEY: &str = "registration_token";

/// `TokenStore` over a shared Redis key with a TTL
pub struct RedisTokenStore {
    client: RedisClient,
    ttl: Duration,
    ttl_seconds: u64,
}

impl RedisTokenStore {
    pub fn new(client: RedisClient, config: &CacheConfig) -> Self {
        Self {
            client,
            ttl: Duration::minutes(config.token_ttl_minutes.max(1)),
            ttl_seconds: config.token_ttl_seconds(),
        }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn mint(&self) -> Result<String, DomainError> {
        let token = AdmissionToken::generate(Utc::now(), self.ttl);

        self.client
            .set_with_expiry(TOKEN_KEY, &token.value, self.ttl_seconds)
            .await?;

        tracing::info!(
            event = "registration_token_minted",
            ttl_seconds = self.ttl_seconds,
            "Registration token minted"
        );
        Ok(token.value)
    }

    async fn validate(&self, candidate: &str) -> Result<bool, DomainError> {
        let stored = self.client.get(TOKEN_KEY).await?;
        Ok(stored
            .map(|value| constant_time_eq(value.as_bytes(), candidate.as_bytes()))
            .unwrap_or(false))
    }

    async fn consume(&self, candidate: &str) -> Result<Option<AdmissionToken>, DomainError> {
        let Some(ttl_ms) = self.client.take_if_equals(TOKEN_KEY, candidate).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let remaining = if ttl_ms > 0 {
            Duration::milliseconds(ttl_ms)
        } else {
            self.ttl
        };
        Ok(Some(AdmissionToken {
            value: candidate.to_string(),
            issued_at: now + remaining - self.ttl,
            expires_at: now + remaining,
        }))
    }

    async fn restore(&self, token: AdmissionToken) -> Result<(), DomainError> {
        let remaining_ms = (token.expires_at - Utc::now()).num_milliseconds();
        if remaining_ms <= 0 {
            return Ok(());
        }

        let written = self
            .client
            .set_if_absent_with_expiry_ms(TOKEN_KEY, &token.value, remaining_ms.unsigned_abs())
            .await?;
        if !written {
            tracing::debug!("Registration token not restored, a newer token is live");
        }
        Ok(())
    }

    async fn invalidate(&self) -> Result<(), DomainError> {
        if self.client.delete(TOKEN_KEY).await? {
            tracing::debug!("Registration token invalidated");
        }
        Ok(())
    }
}
