//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgAuditRepository`] - Append-only movie lookup audit trail

pub mod pg_audit_repository;

pub use pg_audit_repository::PgAuditRepository;
