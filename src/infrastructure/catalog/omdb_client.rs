//! OMDb implementation of the movie catalog.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{
    OmdbLookupResponse, OmdbSearchResponse, envelope_error, is_empty_search_message,
    is_not_found_message, next_page_token,
};
use crate::domain::entities::{MovieRecord, SearchResultPage};
use crate::domain::repositories::MovieCatalog;
use crate::error::AppError;

/// Public OMDb endpoint.
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// HTTP client for the OMDb API.
///
/// The wrapped [`reqwest::Client`] pools connections and is cheap to clone,
/// so one instance is shared by every request for the process lifetime.
///
/// # URL construction
///
/// Query values are concatenated into the request URL exactly as supplied.
/// Nothing is percent-encoded here, so a search term or identifier containing
/// `&`, `#` or `=` changes the query the catalog sees. Callers must pass
/// URL-safe values.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Creates a client against `base_url` with the given API key.
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// URL for a `?s=` search request.
    pub fn search_url(&self, page: &str, search_term: &str) -> String {
        format!(
            "{}?apikey={}&s={}&page={}",
            self.base_url, self.api_key, search_term, page
        )
    }

    /// URL for a `?i=` lookup request.
    pub fn lookup_url(&self, imdb_id: &str) -> String {
        format!(
            "{}?apikey={}&i={}&plot=full",
            self.base_url, self.api_key, imdb_id
        )
    }

    /// Sends a GET and decodes a 2xx JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(format!(
                "catalog responded with status {status}"
            )));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MovieCatalog for OmdbClient {
    async fn search(&self, page: &str, search_term: &str) -> Result<SearchResultPage, AppError> {
        let url = self.search_url(page, search_term);
        debug!(page, search_term, "Searching catalog");

        let body: OmdbSearchResponse = self.get_json(&url).await?;

        if let Some(message) = envelope_error(body.response.as_deref(), body.error.as_deref()) {
            // An empty result set is reported through the error envelope.
            if is_empty_search_message(&message) {
                debug!(page, search_term, "Catalog search returned no results");
                return Ok(SearchResultPage::empty());
            }
            return Err(AppError::upstream(message));
        }

        let next_page = next_page_token(page, body.total_results);
        let items = body.search.into_iter().map(MovieRecord::from).collect();

        Ok(SearchResultPage::new(items, next_page))
    }

    async fn get_by_id(&self, imdb_id: &str) -> Result<MovieRecord, AppError> {
        let url = self.lookup_url(imdb_id);
        debug!(imdb_id, "Looking up movie in catalog");

        let body: OmdbLookupResponse = self.get_json(&url).await?;

        if let Some(message) = envelope_error(body.response.as_deref(), body.error.as_deref()) {
            if is_not_found_message(&message) {
                return Err(AppError::not_found(message));
            }
            return Err(AppError::upstream(message));
        }

        if body.movie.imdb_id.is_empty() {
            return Err(AppError::upstream("catalog returned a movie without an imdbID"));
        }

        Ok(body.movie.into())
    }
}
