//! Remote movie catalog integration.
//!
//! - [`OmdbClient`] - [`crate::domain::repositories::MovieCatalog`] over the OMDb HTTP API
//! - [`models`] - OMDb wire format and envelope handling

pub mod models;
pub mod omdb_client;

pub use omdb_client::{DEFAULT_BASE_URL, OmdbClient};
