//! In-memory caching layer for file-backed repositories.
//!
//! Holds the snapshot of a whole collection, shares one in-flight load between
//! concurrent readers and serializes writes through a single worker.

pub mod cached_repository;

pub use cached_repository::{CachedRepository, PendingSave};
