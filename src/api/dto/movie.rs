//! DTOs for movie endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::MovieRecord;

/// Query parameters for `GET /movies`.
///
/// Both parameters are optional and default to empty strings, which are
/// passed through to the catalog unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct MovieSearchParams {
    #[serde(default)]
    pub searchword: String,

    /// Opaque page cursor, usually the `X-Cursor` value of a previous response.
    #[serde(default)]
    pub page: String,
}

/// JSON representation of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieResponse {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub released: String,
    pub imdb_rating: String,
}

impl From<MovieRecord> for MovieResponse {
    fn from(m: MovieRecord) -> Self {
        Self {
            imdb_id: m.imdb_id,
            title: m.title,
            year: m.year,
            released: m.released,
            imdb_rating: m.imdb_rating,
        }
    }
}
