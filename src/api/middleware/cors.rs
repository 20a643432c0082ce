//! Cross-origin resource sharing middleware.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Allows read-only cross-origin requests from any origin.
///
/// The API is public and unauthenticated, so browsers on any site may call it.
/// The `X-Cursor` header is exposed so scripts can page through results.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::HeaderName::from_static(
            crate::api::handlers::movies::CURSOR_HEADER,
        )])
}
