//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define the contracts implemented by the
//! infrastructure layer.
//!
//! # Architecture
//!
//! - [`entities`] - Movie records, search pages and audit entries
//! - [`repositories`] - Catalog and audit store trait definitions
//!
//! # Lookup Flow
//!
//! 1. HTTP handler calls [`crate::application::services::MovieService`]
//! 2. The service queries a [`repositories::MovieCatalog`] under a deadline
//! 3. On a successful single-movie lookup the handler spawns an audit write via
//!    [`crate::application::services::AuditService`] and joins it
//! 4. The entry is persisted through [`repositories::AuditRepository`]

pub mod entities;
pub mod repositories;
