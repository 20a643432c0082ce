//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod movies;

pub use health::health_handler;
pub use movies::{get_movie_handler, list_movies_handler};
