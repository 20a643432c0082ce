//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Error bodies are
//! produced by [`crate::error::ErrorBody`].

pub mod health;
pub mod movie;

pub use movie::{MovieResponse, MovieSearchParams};
