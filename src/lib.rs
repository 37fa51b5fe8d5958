//! ttsync - table-tennis league schedule sync
//!
//! The persistence core of ttsync: every stored collection (team leads,
//! sports halls) lives in one file and is accessed through a cached
//! repository that loads the file at most once at a time and funnels all
//! writes through a single FIFO worker.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors and port traits
//! - **Adapters** (`adapters`): the cached repository, codecs and concrete repositories
//! - **Infrastructure Layer** (`infrastructure`): storage backends, logging, configuration
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use ttsync::adapters::repositories::TeamLeadRepository;
//! use ttsync::domain::models::TeamLead;
//! use ttsync::infrastructure::logging::TracingLogger;
//! use ttsync::infrastructure::storage::FileStorage;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let storage = Arc::new(FileStorage::new(".ttsync/data", Duration::from_secs(5)));
//!     let leads = TeamLeadRepository::team_leads(storage, Arc::new(TracingLogger::new()), "team-leads.json");
//!
//!     leads.save(TeamLead::new("TTC Nord", "Herren I", "Anna")).await?;
//!     assert_eq!(leads.get_all().await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::cache::{CachedRepository, PendingSave};
pub use adapters::codecs::JsonCodec;
pub use adapters::repositories::{SportsHallRepository, TeamLeadRepository};
pub use domain::errors::{CodecError, RepositoryError, RepositoryResult, StorageError};
pub use domain::models::{Config, SportsHall, TeamLead};
pub use domain::ports::{EntityCodec, Level, Logger, Repository, Storage};
pub use infrastructure::config::{ConfigError, ConfigLoader};
