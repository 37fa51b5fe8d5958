use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Port trait for the opaque text store behind a repository
///
/// A locator names one resource (a file path relative to the storage root for
/// the filesystem adapter). Content is an opaque text blob; the repository's
/// codec decides its format.
///
/// Contract:
/// - `read` of a resource that was never written returns
///   [`StorageError::NotFound`], distinguishable from every other failure.
/// - `write` is all-or-nothing: a concurrent or later `read` observes either
///   the previous content or the new content, never a mix.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the full content of a resource
    async fn read(&self, locator: &str) -> Result<String, StorageError>;

    /// Replace the full content of a resource, creating it if needed
    async fn write(&self, locator: &str, content: &str) -> Result<(), StorageError>;
}
