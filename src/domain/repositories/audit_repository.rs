//! Repository trait for the movie lookup audit trail.

use crate::domain::entities::{AuditEntry, NewAuditEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only store of successful single-movie lookups.
///
/// There is no uniqueness constraint and no read API: every call to
/// [`AuditRepository::store`] appends a new row.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuditRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_audit.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Appends one audit row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuditWriteFailure`] on any database error. The
    /// write is never retried.
    async fn store(&self, entry: NewAuditEntry) -> Result<AuditEntry, AppError>;

    /// Checks that the store is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
