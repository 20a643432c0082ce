//! Business logic services for the application layer.

pub mod audit_service;
pub mod movie_service;

pub use audit_service::AuditService;
pub use movie_service::{DEFAULT_CATALOG_TIMEOUT, MovieService};
