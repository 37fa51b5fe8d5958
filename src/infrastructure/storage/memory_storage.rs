use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::errors::StorageError;
use crate::domain::ports::Storage;

/// Instrumented in-memory [`Storage`] for tests and dry runs.
///
/// Counts physical reads and writes, can delay every operation to widen race
/// windows, and can be told to fail upcoming reads or writes.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    resources: Mutex<HashMap<String, String>>,
    latency: Option<Duration>,
    reads: AtomicUsize,
    writes: AtomicUsize,
    read_failures: Mutex<VecDeque<StorageError>>,
    write_failures: Mutex<VecDeque<StorageError>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every read and write by `latency`
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Seed a resource without counting a write
    pub fn insert(&self, locator: &str, content: &str) {
        lock(&self.resources).insert(locator.to_string(), content.to_string());
    }

    /// Current content of a resource, without counting a read
    pub fn get(&self, locator: &str) -> Option<String> {
        lock(&self.resources).get(locator).cloned()
    }

    /// Make the next read fail with `error`
    pub fn fail_next_read(&self, error: StorageError) {
        lock(&self.read_failures).push_back(error);
    }

    /// Make the next write fail with `error`
    pub fn fail_next_write(&self, error: StorageError) {
        lock(&self.write_failures).push_back(error);
    }

    /// Number of physical reads performed
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of physical writes attempted, failed ones included
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    async fn delay(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn read(&self, locator: &str) -> Result<String, StorageError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.delay().await;

        if let Some(error) = lock(&self.read_failures).pop_front() {
            return Err(error);
        }
        lock(&self.resources)
            .get(locator)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                locator: locator.to_string(),
            })
    }

    async fn write(&self, locator: &str, content: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.delay().await;

        if let Some(error) = lock(&self.write_failures).pop_front() {
            return Err(error);
        }
        lock(&self.resources).insert(locator.to_string(), content.to_string());
        Ok(())
    }
}

// Critical sections never panic, so a poisoned lock still holds valid data.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
