//! API route configuration.

use crate::api::handlers::{get_movie_handler, list_movies_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Movie routes.
///
/// # Endpoints
///
/// - `GET /movies`        - Search the catalog (`searchword`, `page`)
/// - `GET /movies/{id}`   - Look up one movie and record the lookup
pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies_handler))
        .route("/movies/{id}", get(get_movie_handler))
}
