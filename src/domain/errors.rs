use thiserror::Error;

/// Failures reported by a [`Storage`](crate::domain::ports::Storage) backend.
///
/// All variants carry owned strings so the error can be cloned and handed to
/// every caller that was waiting on the same load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Resource not found: {locator}")]
    NotFound { locator: String },

    #[error("I/O error on {locator}: {message}")]
    Io { locator: String, message: String },

    #[error("Storage operation on {locator} timed out after {after_ms}ms")]
    Timeout { locator: String, after_ms: u64 },
}

impl StorageError {
    /// Whether the backing resource simply does not exist yet
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Build an `Io` variant from a `std::io::Error`, mapping `NotFound`
    pub fn from_io(locator: impl Into<String>, err: &std::io::Error) -> Self {
        let locator = locator.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { locator }
        } else {
            Self::Io {
                locator,
                message: err.to_string(),
            }
        }
    }
}

/// Failures converting between a collection and its stored text form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Failed to encode collection: {0}")]
    Encode(String),

    #[error("Failed to decode collection: {0}")]
    Decode(String),
}

/// Errors surfaced by repository operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Failed to load {locator}: {source}")]
    Load {
        locator: String,
        #[source]
        source: StorageError,
    },

    #[error("Malformed content in {locator}: {source}")]
    Decode {
        locator: String,
        #[source]
        source: CodecError,
    },

    #[error("Failed to encode collection for {locator}: {source}")]
    Encode {
        locator: String,
        #[source]
        source: CodecError,
    },

    #[error("Failed to write {entity} to {locator}: {source}")]
    Write {
        locator: String,
        entity: String,
        #[source]
        source: StorageError,
    },

    #[error("Write queue for {locator} is no longer running")]
    WorkerStopped { locator: String },
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;
