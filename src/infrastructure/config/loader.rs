use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Data directory cannot be empty")]
    EmptyDataDir,

    #[error("Invalid io_timeout_ms: {0}. Must be at least 1")]
    InvalidIoTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Repository file for {0} cannot be empty")]
    EmptyRepositoryFile(&'static str),

    #[error("Repositories must not share a backing file: {0}")]
    SharedRepositoryFile(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .ttsync/config.yaml (project config)
    /// 3. .ttsync/local.yaml (local overrides, optional)
    /// 4. Environment variables (TTSYNC_* prefix, `__` separates nesting)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".ttsync/config.yaml"))
            .merge(Yaml::file(".ttsync/local.yaml"))
            .merge(Env::prefixed("TTSYNC_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring env overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("TTSYNC_").split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.data_dir.trim().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }

        if config.storage.io_timeout_ms == 0 {
            return Err(ConfigError::InvalidIoTimeout(config.storage.io_timeout_ms));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        let repositories = &config.repositories;
        if repositories.team_leads.trim().is_empty() {
            return Err(ConfigError::EmptyRepositoryFile("team_leads"));
        }
        if repositories.sports_halls.trim().is_empty() {
            return Err(ConfigError::EmptyRepositoryFile("sports_halls"));
        }
        if repositories.team_leads == repositories.sports_halls {
            return Err(ConfigError::SharedRepositoryFile(repositories.team_leads.clone()));
        }

        Ok(())
    }
}
