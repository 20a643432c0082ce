//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the two external collaborators of the service: the
//! remote movie catalog and the relational audit store. Concrete
//! implementations live in `crate::infrastructure`.
//!
//! # Available Repositories
//!
//! - [`MovieCatalog`] - Movie search and lookup against the remote catalog
//! - [`AuditRepository`] - Append-only lookup audit trail
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` for unit tests. See
//! `tests/catalog_client.rs` and `tests/repository_audit.rs` for the concrete
//! implementations.

pub mod audit_repository;
pub mod catalog_repository;

pub use audit_repository::AuditRepository;
pub use catalog_repository::MovieCatalog;

#[cfg(test)]
pub use audit_repository::MockAuditRepository;
#[cfg(test)]
pub use catalog_repository::MockMovieCatalog;
