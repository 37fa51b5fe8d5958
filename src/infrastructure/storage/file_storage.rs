//! Filesystem-backed storage.
//!
//! Locators are paths relative to a root directory. Writes go to a temp file
//! next to the target which is then renamed over it, so a reader sees either
//! the old file or the new one.

use async_trait::async_trait;
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::domain::errors::StorageError;
use crate::domain::models::StorageConfig;
use crate::domain::ports::Storage;

/// [`Storage`] over files under `root`, each operation bounded by `io_timeout`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
    io_timeout: Duration,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>, io_timeout: Duration) -> Self {
        Self {
            root: root.into(),
            io_timeout,
        }
    }

    pub fn from_config(root: impl Into<PathBuf>, config: &StorageConfig) -> Self {
        Self::new(root, Duration::from_millis(config.io_timeout_ms))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute locators are used as-is, relative ones resolve under `root`.
    pub fn resolve(&self, locator: &str) -> PathBuf {
        let path = Path::new(locator);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    async fn bounded<T, F>(&self, locator: &str, operation: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, StorageError>>,
    {
        tokio::time::timeout(self.io_timeout, operation)
            .await
            .unwrap_or_else(|_| {
                Err(StorageError::Timeout {
                    locator: locator.to_string(),
                    after_ms: timeout_ms(self.io_timeout),
                })
            })
    }
}

/// Whole milliseconds, rounded up so a sub-millisecond bound never reads as 0
fn timeout_ms(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_nanos().div_ceil(1_000_000)).unwrap_or(u64::MAX)
}

#[async_trait]
impl Storage for FileStorage {
    async fn read(&self, locator: &str) -> Result<String, StorageError> {
        let path = self.resolve(locator);
        trace!(path = %path.display(), "reading resource");

        self.bounded(locator, async {
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| StorageError::from_io(locator, &e))
        })
        .await
    }

    async fn write(&self, locator: &str, content: &str) -> Result<(), StorageError> {
        let path = self.resolve(locator);

        // Only staging is bounded. A staged file abandoned by a timeout is
        // deleted when its task finishes and never replaces the target.
        let staging = {
            let owned_locator = locator.to_string();
            let path = path.clone();
            let content = content.to_string();
            tokio::task::spawn_blocking(move || stage(&owned_locator, &path, &content))
        };
        let staged = self
            .bounded(locator, async {
                staging.await.map_err(|e| StorageError::Io {
                    locator: locator.to_string(),
                    message: format!("write task failed: {e}"),
                })?
            })
            .await?;

        // Once staged, the rename always runs to completion so the reported
        // outcome is the one on disk.
        let owned_locator = locator.to_string();
        tokio::task::spawn_blocking(move || commit(&owned_locator, staged, &path))
            .await
            .map_err(|e| StorageError::Io {
                locator: locator.to_string(),
                message: format!("write task failed: {e}"),
            })??;

        debug!(locator, root = %self.root.display(), "resource written");
        Ok(())
    }
}

fn io_error(locator: &str) -> impl Fn(std::io::Error) -> StorageError + '_ {
    move |e| StorageError::Io {
        locator: locator.to_string(),
        message: e.to_string(),
    }
}

/// Write `content` to a synced temp file next to `path`
fn stage(locator: &str, path: &Path, content: &str) -> Result<NamedTempFile, StorageError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    std::fs::create_dir_all(parent).map_err(io_error(locator))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(io_error(locator))?;
    tmp.write_all(content.as_bytes()).map_err(io_error(locator))?;
    tmp.as_file().sync_all().map_err(io_error(locator))?;
    Ok(tmp)
}

/// Atomically rename a staged file over `path`
fn commit(locator: &str, staged: NamedTempFile, path: &Path) -> Result<(), StorageError> {
    staged
        .persist(path)
        .map(drop)
        .map_err(|e| io_error(locator)(e.error))
}
