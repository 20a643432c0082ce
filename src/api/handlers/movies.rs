//! Handlers for movie search and lookup.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use tracing::{debug, warn};

use crate::api::dto::{MovieResponse, MovieSearchParams};
use crate::domain::entities::MovieRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Response header carrying the next-page cursor of a search.
pub const CURSOR_HEADER: &str = "x-cursor";

/// Searches the catalog.
///
/// # Endpoint
///
/// `GET /movies?searchword=batman&page=1`
///
/// # Query Parameters
///
/// - `searchword` - Free-text search term (optional, default empty)
/// - `page` - Opaque page cursor forwarded verbatim (optional, default empty)
///
/// # Response
///
/// A JSON array of movies in catalog order. The cursor for the following page
/// is returned in the `X-Cursor` header; it is empty when there are no more
/// results.
///
/// # Errors
///
/// Returns 400 Bad Request if the query string cannot be parsed.
/// Returns 504 Gateway Timeout if the catalog misses its deadline.
/// Returns 500 Internal Server Error for any other catalog failure.
pub async fn list_movies_handler(
    State(state): State<AppState>,
    query: Result<Query<MovieSearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;

    let page = state
        .movie_service
        .fetch(&params.page, &params.searchword)
        .await?;

    let movies: Vec<MovieResponse> = page.items.into_iter().map(MovieResponse::from).collect();

    Ok(([(CURSOR_HEADER, page.next_page)], Json(movies)))
}

/// Looks up a single movie and records the lookup in the audit trail.
///
/// # Endpoint
///
/// `GET /movies/{id}`
///
/// # Request Flow
///
/// 1. Look up the movie in the catalog (deadline-bound)
/// 2. Spawn the audit write on its own task
/// 3. Wait for the audit task to finish
/// 4. Return 200 with the movie
///
/// # Audit Policy
///
/// The audit write is best-effort. A failed write is logged at `WARN` and the
/// movie is still returned with 200. Failed lookups are never audited. The
/// write runs without the catalog deadline, so a slow lookup does not shorten
/// the time the write is allowed to take.
///
/// # Errors
///
/// Returns 404 Not Found if the catalog reports no such movie.
/// Returns 504 Gateway Timeout if the catalog misses its deadline.
/// Returns 500 Internal Server Error for any other catalog failure.
pub async fn get_movie_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MovieResponse>, AppError> {
    let movie = state.movie_service.get_by_id(&id).await?;

    record_lookup(&state, &movie).await;

    Ok(Json(movie.into()))
}

/// Runs the audit write as one spawned task and joins it.
async fn record_lookup(state: &AppState, movie: &MovieRecord) {
    let audit_service = state.audit_service.clone();
    let record = movie.clone();

    let handle = tokio::spawn(async move { audit_service.record(&record).await });

    match handle.await {
        Ok(Ok(entry)) => {
            debug!(imdb_id = %entry.imdb_id, audit_id = entry.id, "Movie lookup recorded");
        }
        Ok(Err(e)) => {
            warn!(imdb_id = %movie.imdb_id, error = %e, "Failed to record movie lookup");
        }
        Err(e) => {
            warn!(imdb_id = %movie.imdb_id, error = %e, "Audit task did not complete");
        }
    }
}
