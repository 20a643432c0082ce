//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::movie_service::MovieService`] - Deadline-bound catalog search and lookup
//! - [`services::audit_service::AuditService`] - Lookup audit trail recording

pub mod services;
