//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use ttsync::adapters::cache::CachedRepository;
use ttsync::adapters::codecs::JsonCodec;
use ttsync::domain::ports::EntityCodec;
use ttsync::infrastructure::logging::RecordingLogger;
use ttsync::infrastructure::storage::InMemoryStorage;

/// Minimal entity keyed by `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub v: String,
}

pub fn record(id: u32, v: &str) -> Record {
    Record { id, v: v.to_string() }
}

pub type RecordCodec = JsonCodec<Record, fn(&Record, &Record) -> bool>;

fn same_id(a: &Record, b: &Record) -> bool {
    a.id == b.id
}

pub fn record_codec() -> RecordCodec {
    JsonCodec::new(same_id as fn(&Record, &Record) -> bool)
}

pub const LOCATOR: &str = "records.json";

/// A record repository over instrumented in-memory storage
pub struct Fixture {
    pub storage: Arc<InMemoryStorage>,
    pub logger: Arc<RecordingLogger>,
    pub repo: CachedRepository<RecordCodec>,
}

pub fn fixture() -> Fixture {
    fixture_with(InMemoryStorage::new())
}

/// Storage that delays every operation, to keep loads and writes in flight
pub fn slow_fixture(latency_ms: u64) -> Fixture {
    fixture_with(InMemoryStorage::new().with_latency(Duration::from_millis(latency_ms)))
}

pub fn fixture_with(storage: InMemoryStorage) -> Fixture {
    let storage = Arc::new(storage);
    let logger = Arc::new(RecordingLogger::new());
    let repo = CachedRepository::new(record_codec(), storage.clone(), logger.clone(), LOCATOR);
    Fixture {
        storage,
        logger,
        repo,
    }
}

/// Decode what is currently stored under [`LOCATOR`]
pub fn stored_records(storage: &InMemoryStorage) -> Vec<Record> {
    let content = storage.get(LOCATOR).expect("resource should exist");
    record_codec().deserialize(&content).expect("stored content should decode")
}

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}
