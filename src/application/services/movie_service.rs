//! Movie retrieval usecase.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use tracing::{debug, warn};

use crate::domain::entities::{MovieRecord, SearchResultPage};
use crate::domain::repositories::MovieCatalog;
use crate::error::AppError;

/// Default per-call budget for catalog requests.
pub const DEFAULT_CATALOG_TIMEOUT: Duration = Duration::from_secs(2);

/// Service for searching and looking up movies in the remote catalog.
///
/// Every catalog call runs under a fixed deadline so a slow or hung upstream
/// cannot hold request tasks indefinitely. The service is stateless across
/// calls and never retries.
pub struct MovieService {
    catalog: Arc<dyn MovieCatalog>,
    timeout: Duration,
}

impl MovieService {
    /// Creates a new movie service with the given per-call deadline.
    pub fn new(catalog: Arc<dyn MovieCatalog>, timeout: Duration) -> Self {
        Self { catalog, timeout }
    }

    /// Searches the catalog.
    ///
    /// `page` and `search_term` are handed to the catalog untouched, and the
    /// returned page (items and next cursor) is exactly what the catalog
    /// produced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DeadlineExceeded`] if the catalog does not answer in
    /// time. Catalog errors are returned unchanged.
    pub async fn fetch(&self, page: &str, search_term: &str) -> Result<SearchResultPage, AppError> {
        let result = self
            .bounded("search", self.catalog.search(page, search_term))
            .await?;

        debug!(
            page,
            search_term,
            count = result.items.len(),
            next_page = %result.next_page,
            "Catalog search completed"
        );

        Ok(result)
    }

    /// Looks up a single movie by catalog identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DeadlineExceeded`] if the catalog does not answer in
    /// time. Catalog errors, including [`AppError::NotFound`], are returned
    /// unchanged.
    pub async fn get_by_id(&self, imdb_id: &str) -> Result<MovieRecord, AppError> {
        self.bounded("get_by_id", self.catalog.get_by_id(imdb_id))
            .await
    }

    /// Runs one catalog call under the deadline.
    ///
    /// The call future is dropped as soon as this returns, whether it finished
    /// or timed out.
    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        counter!("catalog_requests_total", "operation" => operation).increment(1);

        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                counter!("catalog_errors_total", "operation" => operation).increment(1);
                warn!(operation, error = %e, "Catalog call failed");
                Err(e)
            }
            Err(_) => {
                counter!("catalog_timeouts_total", "operation" => operation).increment(1);
                warn!(
                    operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Catalog call exceeded deadline"
                );
                Err(AppError::deadline_exceeded(self.timeout))
            }
        }
    }
}
