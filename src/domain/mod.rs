//! Domain layer for ttsync
//!
//! This module contains the domain models, error types and the port traits
//! that adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{CodecError, RepositoryError, RepositoryResult, StorageError};
