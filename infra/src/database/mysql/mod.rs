//! MySQL repository implementations

pub mod position_repository_impl;
pub mod user_repository_impl;

pub use position_repository_impl::MySqlPositionRepository;
pub use user_repository_impl::MySqlUserRepository;

use ud_core::errors::DomainError;

/// Map a SQLx failure onto the domain's internal error
pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, context, "Database operation failed");
    DomainError::internal(format!("{}: {}", context, e))
}

/// MySQL returns unsigned identifiers; the domain uses `i64`
pub(crate) fn to_domain_id(raw: u64) -> Result<i64, DomainError> {
    i64::try_from(raw).map_err(|_| DomainError::internal(format!("Identifier out of range: {}", raw)))
}
