//! Cached, write-serialized repository over a single backing resource.
//!
//! Reads go through an in-memory snapshot that is loaded lazily and at most
//! once at a time: concurrent callers that find no snapshot all await the same
//! shared load future. Writes are funneled through one worker task that drains
//! a FIFO channel, so every save is a complete read-modify-write cycle against
//! the snapshot left behind by the previous save.

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::{mpsc, oneshot, Mutex};
use tracing::{debug, trace, warn};

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::ports::{EntityCodec, Logger, Repository, Storage};

type Snapshot<T> = Arc<Vec<T>>;
type SharedLoad<T> = Shared<BoxFuture<'static, RepositoryResult<Snapshot<T>>>>;

enum SnapshotState<T> {
    /// Never loaded, or the last load failed
    Absent,
    /// A load is in flight; every caller awaits a clone of `load`
    Loading { id: u64, load: SharedLoad<T> },
    /// Reflects the last successful write, or the last load if none since
    Present(Snapshot<T>),
}

struct WriteJob<T> {
    entity: T,
    done: oneshot::Sender<RepositoryResult<()>>,
}

struct Inner<C: EntityCodec> {
    codec: Arc<C>,
    storage: Arc<dyn Storage>,
    logger: Arc<dyn Logger>,
    locator: String,
    state: Mutex<SnapshotState<C::Entity>>,
    next_load_id: AtomicU64,
}

/// Repository of `C::Entity` values persisted as one collection in `locator`.
///
/// Handles are cheap to clone and share the snapshot and write queue. The
/// backing resource must not be shared with another repository instance.
pub struct CachedRepository<C: EntityCodec> {
    inner: Arc<Inner<C>>,
    jobs: mpsc::UnboundedSender<WriteJob<C::Entity>>,
}

impl<C: EntityCodec> Clone for CachedRepository<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            jobs: self.jobs.clone(),
        }
    }
}

impl<C: EntityCodec> CachedRepository<C> {
    /// Create a repository and start its write worker.
    ///
    /// Must be called from within a Tokio runtime. Nothing is read until the
    /// first `get_all` or `save`.
    pub fn new(
        codec: C,
        storage: Arc<dyn Storage>,
        logger: Arc<dyn Logger>,
        locator: impl Into<String>,
    ) -> Self {
        let inner = Arc::new(Inner {
            codec: Arc::new(codec),
            storage,
            logger,
            locator: locator.into(),
            state: Mutex::new(SnapshotState::Absent),
            next_load_id: AtomicU64::new(0),
        });

        let (jobs, queue) = mpsc::unbounded_channel();
        tokio::spawn(run_write_queue(Arc::clone(&inner), queue));

        Self { inner, jobs }
    }

    /// The backing resource this repository reads and writes
    pub fn locator(&self) -> &str {
        &self.inner.locator
    }

    /// Return the full collection, loading it on first access.
    ///
    /// A missing backing resource yields an empty collection. Any other
    /// failure is logged once, returned to every caller that was waiting on
    /// the same load, and leaves the cache empty so the next call retries.
    pub async fn get_all(&self) -> RepositoryResult<Snapshot<C::Entity>> {
        self.inner.snapshot().await
    }

    /// Queue an upsert of `entity` and return a handle to its outcome.
    ///
    /// The job is queued before this returns, so the order of `enqueue` calls
    /// is the order in which writes reach storage, whether or not the
    /// handles are awaited.
    pub fn enqueue(&self, entity: C::Entity) -> PendingSave {
        let (done, outcome) = oneshot::channel();
        let receiver = match self.jobs.send(WriteJob { entity, done }) {
            Ok(()) => Some(outcome),
            Err(_) => None,
        };
        PendingSave {
            locator: self.inner.locator.clone(),
            receiver,
        }
    }

    /// Upsert `entity` and wait until the write has been applied.
    ///
    /// An entity whose primary key matches a stored one replaces it in place;
    /// otherwise it is appended. A failed write is logged and reported here,
    /// and later saves still proceed.
    pub async fn save(&self, entity: C::Entity) -> RepositoryResult<()> {
        self.enqueue(entity).await
    }
}

#[async_trait]
impl<C: EntityCodec> Repository<C::Entity> for CachedRepository<C> {
    async fn get_all(&self) -> RepositoryResult<Arc<Vec<C::Entity>>> {
        Self::get_all(self).await
    }

    async fn save(&self, entity: C::Entity) -> RepositoryResult<()> {
        Self::save(self, entity).await
    }
}

/// Outcome of one queued save.
///
/// Resolves once the write worker has finished this specific job.
#[must_use = "a save is applied regardless, but its failure is only visible by awaiting"]
pub struct PendingSave {
    locator: String,
    receiver: Option<oneshot::Receiver<RepositoryResult<()>>>,
}

impl Future for PendingSave {
    type Output = RepositoryResult<()>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let locator = &this.locator;
        match this.receiver.as_mut() {
            None => Poll::Ready(Err(RepositoryError::WorkerStopped {
                locator: locator.clone(),
            })),
            Some(receiver) => Pin::new(receiver).poll(cx).map(|outcome| {
                outcome.unwrap_or_else(|_| {
                    Err(RepositoryError::WorkerStopped {
                        locator: locator.clone(),
                    })
                })
            }),
        }
    }
}

impl<C: EntityCodec> Inner<C> {
    async fn snapshot(&self) -> RepositoryResult<Snapshot<C::Entity>> {
        let (id, load) = {
            let mut state = self.state.lock().await;
            match &*state {
                SnapshotState::Present(snapshot) => {
                    trace!(locator = %self.locator, "snapshot cache hit");
                    return Ok(Arc::clone(snapshot));
                }
                SnapshotState::Loading { id, load } => {
                    trace!(locator = %self.locator, load_id = *id, "joining in-flight load");
                    (*id, load.clone())
                }
                SnapshotState::Absent => {
                    let id = self.next_load_id.fetch_add(1, Ordering::Relaxed);
                    let load = self.start_load();
                    *state = SnapshotState::Loading {
                        id,
                        load: load.clone(),
                    };
                    (id, load)
                }
            }
        };

        let outcome = load.await;

        // Install only if no later write or load has replaced this one.
        let mut state = self.state.lock().await;
        if matches!(&*state, SnapshotState::Loading { id: current, .. } if *current == id) {
            *state = match &outcome {
                Ok(snapshot) => SnapshotState::Present(Arc::clone(snapshot)),
                Err(_) => SnapshotState::Absent,
            };
        }

        outcome
    }

    fn start_load(&self) -> SharedLoad<C::Entity> {
        let codec = Arc::clone(&self.codec);
        let storage = Arc::clone(&self.storage);
        let logger = Arc::clone(&self.logger);
        let locator = self.locator.clone();

        async move {
            debug!(locator = %locator, "loading collection from storage");
            let loaded = match storage.read(&locator).await {
                Ok(content) => codec
                    .deserialize(&content)
                    .map_err(|source| RepositoryError::Decode {
                        locator: locator.clone(),
                        source,
                    }),
                Err(err) if err.is_not_found() => {
                    debug!(locator = %locator, "backing resource missing, starting empty");
                    Ok(Vec::new())
                }
                Err(source) => Err(RepositoryError::Load {
                    locator: locator.clone(),
                    source,
                }),
            };

            match loaded {
                Ok(entities) => {
                    debug!(locator = %locator, count = entities.len(), "collection loaded");
                    Ok(Arc::new(entities))
                }
                Err(err) => {
                    logger
                        .error(
                            "Failed to load collection",
                            fields([("locator", json!(locator)), ("error", json!(err.to_string()))]),
                        )
                        .await;
                    Err(err)
                }
            }
        }
        .boxed()
        .shared()
    }

    async fn apply_save(&self, entity: C::Entity) -> RepositoryResult<()> {
        let label = self.codec.describe(&entity);

        let outcome = self.write_through(entity, &label).await;
        if let Err(err) = &outcome {
            warn!(locator = %self.locator, entity = %label, error = %err, "save failed");
            self.logger
                .error(
                    "Failed to save entity",
                    fields([
                        ("locator", json!(self.locator)),
                        ("entity", json!(label)),
                        ("error", json!(err.to_string())),
                    ]),
                )
                .await;
        }
        outcome
    }

    async fn write_through(&self, entity: C::Entity, label: &str) -> RepositoryResult<()> {
        let current = self.snapshot().await?;

        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        let replaced = upsert(&*self.codec, &mut next, entity);

        let content = self
            .codec
            .serialize(&next)
            .map_err(|source| RepositoryError::Encode {
                locator: self.locator.clone(),
                source,
            })?;

        self.storage
            .write(&self.locator, &content)
            .await
            .map_err(|source| RepositoryError::Write {
                locator: self.locator.clone(),
                entity: label.to_string(),
                source,
            })?;

        *self.state.lock().await = SnapshotState::Present(Arc::new(next));
        debug!(locator = %self.locator, entity = %label, replaced, "save applied");
        Ok(())
    }
}

async fn run_write_queue<C: EntityCodec>(
    inner: Arc<Inner<C>>,
    mut queue: mpsc::UnboundedReceiver<WriteJob<C::Entity>>,
) {
    while let Some(WriteJob { entity, done }) = queue.recv().await {
        let outcome = inner.apply_save(entity).await;
        if done.send(outcome).is_err() {
            trace!(locator = %inner.locator, "save handle dropped before completion");
        }
    }
    debug!(locator = %inner.locator, "write queue closed");
}

/// Replace the entity sharing `entity`'s primary key, or append it.
///
/// Returns `true` when an existing entry was replaced.
pub(crate) fn upsert<C: EntityCodec>(codec: &C, entities: &mut Vec<C::Entity>, entity: C::Entity) -> bool {
    match entities
        .iter()
        .position(|existing| codec.is_same_primary_key(existing, &entity))
    {
        Some(index) => {
            entities[index] = entity;
            true
        }
        None => {
            entities.push(entity);
            false
        }
    }
}

fn fields<const N: usize>(pairs: [(&str, Value); N]) -> HashMap<String, Value> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::codecs::JsonCodec;
    use crate::infrastructure::logging::RecordingLogger;
    use crate::infrastructure::storage::InMemoryStorage;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: u32,
        v: String,
    }

    fn item(id: u32, v: &str) -> Item {
        Item { id, v: v.to_string() }
    }

    fn codec() -> impl EntityCodec<Entity = Item> {
        JsonCodec::new(|a: &Item, b: &Item| a.id == b.id)
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut items = vec![item(1, "a"), item(2, "b"), item(3, "c")];
        assert!(upsert(&codec(), &mut items, item(2, "B")));
        assert_eq!(items, vec![item(1, "a"), item(2, "B"), item(3, "c")]);
    }

    #[test]
    fn test_upsert_appends_unknown_key() {
        let mut items = vec![item(1, "a")];
        assert!(!upsert(&codec(), &mut items, item(9, "z")));
        assert_eq!(items, vec![item(1, "a"), item(9, "z")]);
    }

    #[tokio::test]
    async fn test_snapshot_is_shared_between_callers() {
        let storage = Arc::new(InMemoryStorage::new());
        let repo = CachedRepository::new(
            codec(),
            storage.clone(),
            Arc::new(RecordingLogger::new()),
            "items.json",
        );

        let first = repo.get_all().await.unwrap();
        let second = repo.get_all().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(storage.read_count(), 1);
    }

    #[tokio::test]
    async fn test_save_installs_new_snapshot_without_reload() {
        let storage = Arc::new(InMemoryStorage::new());
        let repo = CachedRepository::new(
            codec(),
            storage.clone(),
            Arc::new(RecordingLogger::new()),
            "items.json",
        );

        repo.save(item(1, "a")).await.unwrap();
        repo.save(item(2, "b")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(*all, vec![item(1, "a"), item(2, "b")]);
        assert_eq!(storage.read_count(), 1);
        assert_eq!(storage.write_count(), 2);
    }

    #[tokio::test]
    async fn test_load_joined_by_save_does_not_clobber_written_snapshot() {
        let storage = Arc::new(InMemoryStorage::new().with_latency(Duration::from_millis(20)));
        storage.insert("items.json", r#"[{"id":1,"v":"a"}]"#);
        let repo = CachedRepository::new(
            codec(),
            storage.clone(),
            Arc::new(RecordingLogger::new()),
            "items.json",
        );

        let (read, saved) = tokio::join!(repo.get_all(), repo.save(item(1, "b")));
        saved.unwrap();
        assert_eq!(*read.unwrap(), vec![item(1, "a")]);

        assert_eq!(*repo.get_all().await.unwrap(), vec![item(1, "b")]);
        assert_eq!(storage.read_count(), 1);
    }

    #[test]
    fn test_pending_save_without_queue_is_ready_with_worker_stopped() {
        let mut pending = tokio_test::task::spawn(PendingSave {
            locator: "items.json".to_string(),
            receiver: None,
        });
        let err = tokio_test::assert_ready_err!(pending.poll());
        assert_eq!(
            err,
            RepositoryError::WorkerStopped {
                locator: "items.json".to_string()
            }
        );
    }

    #[test]
    fn test_pending_save_waits_for_its_job() {
        let (done, receiver) = oneshot::channel();
        let mut pending = tokio_test::task::spawn(PendingSave {
            locator: "items.json".to_string(),
            receiver: Some(receiver),
        });

        tokio_test::assert_pending!(pending.poll());
        done.send(Ok(())).unwrap();
        assert!(pending.is_woken());
        tokio_test::assert_ready_ok!(pending.poll());
    }

    #[test]
    fn test_pending_save_reports_dropped_job_as_worker_stopped() {
        let (done, receiver) = oneshot::channel::<RepositoryResult<()>>();
        let mut pending = tokio_test::task::spawn(PendingSave {
            locator: "items.json".to_string(),
            receiver: Some(receiver),
        });

        drop(done);
        let err = tokio_test::assert_ready_err!(pending.poll());
        assert!(matches!(err, RepositoryError::WorkerStopped { .. }));
    }

    #[tokio::test]
    async fn test_locator_accessor() {
        let repo = CachedRepository::new(
            codec(),
            Arc::new(InMemoryStorage::new()),
            Arc::new(RecordingLogger::new()),
            "nested/items.json",
        );
        assert_eq!(repo.locator(), "nested/items.json");
    }
}
