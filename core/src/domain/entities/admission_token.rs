//! Admission token entity gating user registration.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, RngCore};

/// Lifetime of a freshly minted token (40 minutes)
pub const TOKEN_TTL_MINUTES: i64 = 40;

/// Random bytes drawn before encoding
pub const TOKEN_ENTROPY_BYTES: usize = 100;

/// The single live registration token and its absolute expiry
#[derive(Clone, PartialEq, Eq)]
pub struct AdmissionToken {
    /// Printable (standard base64) token value
    pub value: String,

    /// Timestamp when the token was minted
    pub issued_at: DateTime<Utc>,

    /// Timestamp after which the token no longer admits anyone
    pub expires_at: DateTime<Utc>,
}

impl AdmissionToken {
    /// Mints a new token at `now` with the given lifetime
    ///
    /// The value is `TOKEN_ENTROPY_BYTES` bytes from the operating system
    /// CSPRNG, base64-encoded.
    pub fn generate(now: DateTime<Utc>, ttl: Duration) -> Self {
        let mut bytes = [0u8; TOKEN_ENTROPY_BYTES];
        OsRng.fill_bytes(&mut bytes);

        Self {
            value: STANDARD.encode(bytes),
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    /// Wraps an existing value (e.g. one read back from a shared cache)
    pub fn from_parts(value: String, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            value,
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    /// Checks if the token has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Compares a presented credential against this token in constant time
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.value.as_bytes(), candidate.as_bytes())
    }

    /// True when the token is unexpired at `now` and equals `candidate`
    pub fn admits(&self, candidate: &str, now: DateTime<Utc>) -> bool {
        !self.is_expired_at(now) && self.matches(candidate)
    }
}

// The token value is a credential; keep it out of logs.
impl std::fmt::Debug for AdmissionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdmissionToken")
            .field("value", &"<redacted>")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
