//! Storage adapters
//!
//! - `FileStorage`: files under a data directory, atomic replace on write
//! - `InMemoryStorage`: instrumented map for tests

pub mod file_storage;
pub mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::InMemoryStorage;
