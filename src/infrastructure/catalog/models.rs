//! OMDb wire format.
//!
//! OMDb answers most logical failures with `200 OK` and an envelope of
//! `{"Response": "False", "Error": "..."}`, so every payload carries the
//! `Response`/`Error` pair alongside its data.

use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::domain::entities::MovieRecord;

/// Results per search page. Fixed by the OMDb API.
pub const SEARCH_PAGE_SIZE: u64 = 10;

/// A movie object as returned by both `?s=` and `?i=` requests.
///
/// Search results only carry `Title`, `Year` and `imdbID`; the remaining
/// fields default to empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OmdbMovie {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Released")]
    pub released: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
}

impl From<OmdbMovie> for MovieRecord {
    fn from(m: OmdbMovie) -> Self {
        MovieRecord {
            imdb_id: m.imdb_id,
            title: m.title,
            year: m.year,
            released: m.released,
            imdb_rating: m.imdb_rating,
        }
    }
}

/// Response to a `?i=` lookup.
#[derive(Debug, Deserialize)]
pub struct OmdbLookupResponse {
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub movie: OmdbMovie,
}

/// Response to a `?s=` search.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbMovie>,
    /// Only drives the next cursor, so an unparseable count reads as absent.
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<u64>,
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// Returns the catalog's error message if the envelope reports a failure.
pub fn envelope_error(response: Option<&str>, error: Option<&str>) -> Option<String> {
    match response {
        Some(r) if r.eq_ignore_ascii_case("false") => {
            Some(error.unwrap_or("catalog reported an unspecified error").to_string())
        }
        _ => None,
    }
}

/// Whether an OMDb error message means "no such title".
///
/// OMDb uses `"Movie not found!"`, `"Series or episode not found!"` and
/// `"Incorrect IMDb ID."` for missing titles; everything else (bad API key,
/// rate limits, overly broad searches) is an upstream failure.
pub fn is_not_found_message(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("not found") || lower.contains("incorrect imdb id")
}

/// OMDb's message for a search with no matches.
pub const EMPTY_SEARCH_MESSAGE: &str = "Movie not found!";

/// Whether a search error envelope means "no results" rather than a failure.
pub fn is_empty_search_message(message: &str) -> bool {
    message == EMPTY_SEARCH_MESSAGE
}

/// Computes the cursor for the page after `page`.
///
/// An empty token stands for page 1. Tokens that are not positive integers
/// were forwarded verbatim and cannot be continued, so they yield no cursor.
pub fn next_page_token(page: &str, total_results: Option<u64>) -> String {
    let current = if page.is_empty() {
        1
    } else {
        match page.parse::<u64>() {
            Ok(p) if p > 0 => p,
            _ => return String::new(),
        }
    };

    match total_results {
        Some(total) if current.saturating_mul(SEARCH_PAGE_SIZE) < total => {
            (current + 1).to_string()
        }
        _ => String::new(),
    }
}
