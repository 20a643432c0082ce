//! Movie entities produced by catalog lookups.

/// One catalog entry.
///
/// All fields are passed through exactly as the catalog supplies them. The
/// catalog types years and ratings loosely (`"2005"`, `"2005–2008"`, `"N/A"`),
/// so they stay strings and are never validated locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    /// Catalog-assigned identifier (an IMDb id such as `tt0372784`).
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub released: String,
    pub imdb_rating: String,
}

impl MovieRecord {
    /// Creates a new MovieRecord instance.
    pub fn new(
        imdb_id: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
        released: impl Into<String>,
        imdb_rating: impl Into<String>,
    ) -> Self {
        Self {
            imdb_id: imdb_id.into(),
            title: title.into(),
            year: year.into(),
            released: released.into(),
            imdb_rating: imdb_rating.into(),
        }
    }
}

/// One page of search results plus the cursor for the page after it.
///
/// `next_page` is an opaque token handed back to the catalog verbatim on the
/// following request. It is empty when the catalog has nothing further.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResultPage {
    pub items: Vec<MovieRecord>,
    pub next_page: String,
}

impl SearchResultPage {
    pub fn new(items: Vec<MovieRecord>, next_page: impl Into<String>) -> Self {
        Self {
            items,
            next_page: next_page.into(),
        }
    }

    /// A page with no results and no continuation.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_next(&self) -> bool {
        !self.next_page.is_empty()
    }
}
