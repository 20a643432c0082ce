//! Audit entry entity recording a single successful movie lookup.

use chrono::{DateTime, Utc};

use super::MovieRecord;

/// A persisted row of the lookup audit trail.
///
/// Rows are append-only: the same movie looked up twice produces two entries.
/// There is no link back to catalog state beyond the copied fields.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: i64,
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub released: String,
    pub imdb_rating: String,
    pub logged_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Returns true if this entry carries exactly the fields of `movie`.
    pub fn matches(&self, movie: &MovieRecord) -> bool {
        self.imdb_id == movie.imdb_id
            && self.title == movie.title
            && self.year == movie.year
            && self.released == movie.released
            && self.imdb_rating == movie.imdb_rating
    }
}

/// Input data for appending an audit entry.
///
/// The row id and `logged_at` timestamp are assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditEntry {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub released: String,
    pub imdb_rating: String,
}

impl From<&MovieRecord> for NewAuditEntry {
    fn from(movie: &MovieRecord) -> Self {
        Self {
            imdb_id: movie.imdb_id.clone(),
            title: movie.title.clone(),
            year: movie.year.clone(),
            released: movie.released.clone(),
            imdb_rating: movie.imdb_rating.clone(),
        }
    }
}
