//! Repository trait for the external movie catalog.

use crate::domain::entities::{MovieRecord, SearchResultPage};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to a remote movie catalog.
///
/// Each call issues exactly one outbound request. Implementations perform no
/// retries and no caching; deadlines are applied by the caller
/// ([`crate::application::services::MovieService`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::catalog::OmdbClient`] - OMDb HTTP API
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/catalog_client.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Searches the catalog by free-text term.
    ///
    /// `page` is forwarded verbatim as the catalog's paging parameter and
    /// `search_term` is passed through even when empty. Results keep the order
    /// the catalog returned them in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamFailure`] on network errors, non-2xx
    /// statuses, malformed bodies or catalog-reported failures.
    async fn search(&self, page: &str, search_term: &str) -> Result<SearchResultPage, AppError>;

    /// Looks up a single movie by its catalog identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the catalog reports no such title.
    /// Returns [`AppError::UpstreamFailure`] for every other failure.
    async fn get_by_id(&self, imdb_id: &str) -> Result<MovieRecord, AppError>;
}
