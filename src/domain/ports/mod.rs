//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that adapters implement:
//! - Storage: opaque text store behind a repository
//! - Logger: structured, fire-and-forget diagnostics
//! - EntityCodec: primary-key equality and collection encoding per entity type
//! - Repository: read-all / upsert-one access to a persisted collection

pub mod entity_codec;
pub mod logger;
pub mod repository;
pub mod storage;

pub use entity_codec::EntityCodec;
pub use logger::{Level, Logger};
pub use repository::Repository;
pub use storage::Storage;
