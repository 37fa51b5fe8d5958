use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::RepositoryResult;

/// Read-all / upsert-one access to a persisted collection.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Returns the full collection. The returned snapshot is shared and read-only.
    async fn get_all(&self) -> RepositoryResult<Arc<Vec<T>>>;

    /// Inserts `entity`, or replaces the stored entity with the same primary key.
    ///
    /// Resolves once this particular write has been applied (or has failed).
    async fn save(&self, entity: T) -> RepositoryResult<()>;
}
