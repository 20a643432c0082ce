//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`catalog`] - OMDb HTTP client
//! - [`persistence`] - PostgreSQL repository implementations

pub mod catalog;
pub mod persistence;
