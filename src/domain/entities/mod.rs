//! Core domain entities.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`MovieRecord`] - One catalog entry
//! - [`SearchResultPage`] - A page of search results with its continuation cursor
//! - [`AuditEntry`] - A persisted lookup audit row
//!
//! Following the "New Type" pattern, [`NewAuditEntry`] is the insert-side
//! shape of an audit row.

pub mod audit_entry;
pub mod movie;

pub use audit_entry::{AuditEntry, NewAuditEntry};
pub use movie::{MovieRecord, SearchResultPage};
