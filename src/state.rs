//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuditService, MovieService};

/// Process-wide handles shared by all request tasks.
///
/// Both services wrap stateless, concurrency-safe clients (a pooled HTTP
/// client and a database pool), so cloning the state only bumps reference
/// counts and no locking is required.
#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
    pub audit_service: Arc<AuditService>,
}

impl AppState {
    pub fn new(movie_service: Arc<MovieService>, audit_service: Arc<AuditService>) -> Self {
        Self {
            movie_service,
            audit_service,
        }
    }
}
