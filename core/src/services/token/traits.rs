//! Token store trait

use async_trait::async_trait;

use crate::domain::entities::admission_token::AdmissionToken;
use crate::errors::DomainError;

/// Single-slot store for the live admission token.
///
/// At most one token is live at a time. Implementations must tolerate
/// concurrent calls from many request handlers.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Generate a new token, replacing any previous one, and return its value
    async fn mint(&self) -> Result<String, DomainError>;

    /// True iff a live, unexpired token exists and equals `candidate` exactly
    async fn validate(&self, candidate: &str) -> Result<bool, DomainError>;

    /// Atomically take the live token if it still equals `candidate`.
    ///
    /// Of several concurrent callers presenting the same token, exactly one
    /// gets `Some`. A token minted in the meantime is left untouched.
    async fn consume(&self, candidate: &str) -> Result<Option<AdmissionToken>, DomainError>;

    /// Put back a token taken by `consume`, keeping its original expiry.
    ///
    /// No-op when the token has expired or another token occupies the slot.
    async fn restore(&self, token: AdmissionToken) -> Result<(), DomainError>;

    /// Remove the live token; a no-op when none exists
    async fn invalidate(&self) -> Result<(), DomainError>;
}
