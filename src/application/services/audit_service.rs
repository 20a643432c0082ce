//! Lookup audit service.

use std::sync::Arc;

use metrics::counter;

use crate::domain::entities::{AuditEntry, MovieRecord, NewAuditEntry};
use crate::domain::repositories::AuditRepository;
use crate::error::AppError;

/// Service recording successful movie lookups in the audit trail.
///
/// Writes are append-only and never retried. Callers treat failures as
/// best-effort: they are reported, not propagated to clients.
pub struct AuditService {
    repository: Arc<dyn AuditRepository>,
}

impl AuditService {
    /// Creates a new audit service.
    pub fn new(repository: Arc<dyn AuditRepository>) -> Self {
        Self { repository }
    }

    /// Appends one audit entry copying the fields of `movie`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuditWriteFailure`] if the store rejects the write.
    pub async fn record(&self, movie: &MovieRecord) -> Result<AuditEntry, AppError> {
        match self.repository.store(NewAuditEntry::from(movie)).await {
            Ok(entry) => {
                counter!("audit_writes_total").increment(1);
                Ok(entry)
            }
            Err(e) => {
                counter!("audit_write_failures_total").increment(1);
                Err(e)
            }
        }
    }

    /// Checks whether the audit store is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}
