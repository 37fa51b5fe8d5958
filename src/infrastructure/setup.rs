//! Repository wiring from configuration
//!
//! Builds the shared storage and logger once and hands both to every
//! repository, each with its own backing file.

use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::adapters::repositories::{SportsHallRepository, TeamLeadRepository};
use crate::domain::models::Config;
use crate::domain::ports::{Logger, Storage};
use crate::infrastructure::logging::TracingLogger;
use crate::infrastructure::storage::FileStorage;

/// All repositories of the application
#[derive(Clone)]
pub struct Repositories {
    pub team_leads: TeamLeadRepository,
    pub sports_halls: SportsHallRepository,
}

impl Repositories {
    /// File-backed repositories under `config.data_dir`, logging through `tracing`
    ///
    /// Must be called from within a Tokio runtime.
    pub fn from_config(config: &Config) -> Self {
        let storage = Arc::new(FileStorage::from_config(&config.data_dir, &config.storage));
        debug!(data_dir = %Path::new(&config.data_dir).display(), "wiring repositories");
        Self::with_backends(config, storage, Arc::new(TracingLogger::new()))
    }

    /// Repositories over explicit storage and logger backends
    pub fn with_backends(config: &Config, storage: Arc<dyn Storage>, logger: Arc<dyn Logger>) -> Self {
        Self {
            team_leads: TeamLeadRepository::team_leads(
                Arc::clone(&storage),
                Arc::clone(&logger),
                &config.repositories.team_leads,
            ),
            sports_halls: SportsHallRepository::sports_halls(
                storage,
                logger,
                &config.repositories.sports_halls,
            ),
        }
    }
}
