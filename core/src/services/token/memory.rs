//! Process-local token store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::admission_token::AdmissionToken;
use crate::errors::DomainError;

use super::config::TokenStoreConfig;
use super::traits::TokenStore;

/// Mutex-guarded optional token with an absolute expiry.
///
/// The lock is only held for the duration of a slot read or write and is
/// never held across an await point.
pub struct InMemoryTokenStore {
    slot: Mutex<Option<AdmissionToken>>,
    config: TokenStoreConfig,
}

impl InMemoryTokenStore {
    /// Create a new store with the default 40 minute lifetime
    pub fn new() -> Self {
        Self::with_config(TokenStoreConfig::default())
    }

    pub fn with_config(config: TokenStoreConfig) -> Self {
        Self {
            slot: Mutex::new(None),
            config,
        }
    }

    // A panic while holding the lock cannot leave the slot half-written,
    // so a poisoned guard is still usable.
    fn slot(&self) -> MutexGuard<'_, Option<AdmissionToken>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mint a token as if the current time were `now`
    pub fn mint_at(&self, now: DateTime<Utc>) -> String {
        let token = AdmissionToken::generate(now, self.config.ttl());
        let value = token.value.clone();
        *self.slot() = Some(token);

        tracing::info!(
            event = "registration_token_minted",
            expires_at = %now.checked_add_signed(self.config.ttl()).unwrap_or(now),
            "Registration token minted"
        );
        value
    }

    /// Validate `candidate` as if the current time were `now`
    ///
    /// An expired token is dropped from the slot on the way out.
    pub fn validate_at(&self, candidate: &str, now: DateTime<Utc>) -> bool {
        let mut slot = self.slot();
        match slot.as_ref() {
            Some(token) if token.is_expired_at(now) => {
                *slot = None;
                false
            }
            Some(token) => token.matches(candidate),
            None => false,
        }
    }

    /// Take the token as if the current time were `now`
    ///
    /// Compare and clear happen under one lock acquisition.
    pub fn consume_at(&self, candidate: &str, now: DateTime<Utc>) -> Option<AdmissionToken> {
        let mut slot = self.slot();
        match slot.as_ref() {
            Some(token) if token.admits(candidate, now) => slot.take(),
            Some(token) if token.is_expired_at(now) => {
                *slot = None;
                None
            }
            _ => None,
        }
    }

    /// Restore `token` as if the current time were `now`
    pub fn restore_at(&self, token: AdmissionToken, now: DateTime<Utc>) -> bool {
        if token.is_expired_at(now) {
            return false;
        }
        let mut slot = self.slot();
        if slot.is_some() {
            return false;
        }
        *slot = Some(token);
        true
    }

    /// Whether a token is currently stored (expired or not)
    pub fn is_occupied(&self) -> bool {
        self.slot().is_some()
    }
}

impl Default for InMemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn mint(&self) -> Result<String, DomainError> {
        Ok(self.mint_at(Utc::now()))
    }

    async fn validate(&self, candidate: &str) -> Result<bool, DomainError> {
        Ok(self.validate_at(candidate, Utc::now()))
    }

    async fn consume(&self, candidate: &str) -> Result<Option<AdmissionToken>, DomainError> {
        Ok(self.consume_at(candidate, Utc::now()))
    }

    async fn restore(&self, token: AdmissionToken) -> Result<(), DomainError> {
        if !self.restore_at(token, Utc::now()) {
            tracing::debug!("Registration token not restored, slot taken or token expired");
        }
        Ok(())
    }

    async fn invalidate(&self) -> Result<(), DomainError> {
        *self.slot() = None;
        Ok(())
    }
}
