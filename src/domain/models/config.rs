use serde::{Deserialize, Serialize};

/// Main configuration structure for ttsync
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Directory holding the repository files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Storage backend configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Backing file names of the repositories, relative to `data_dir`
    #[serde(default)]
    pub repositories: RepositoriesConfig,
}

fn default_data_dir() -> String {
    ".ttsync/data".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
            repositories: RepositoriesConfig::default(),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StorageConfig {
    /// Upper bound for a single read or write, in milliseconds
    #[serde(default = "default_io_timeout_ms")]
    pub io_timeout_ms: u64,
}

const fn default_io_timeout_ms() -> u64 {
    5000
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            io_timeout_ms: default_io_timeout_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<String>,

    /// Rotation of log files: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// Repository file names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RepositoriesConfig {
    #[serde(default = "default_team_leads")]
    pub team_leads: String,

    #[serde(default = "default_sports_halls")]
    pub sports_halls: String,
}

fn default_team_leads() -> String {
    "team-leads.json".to_string()
}

fn default_sports_halls() -> String {
    "sports-halls.json".to_string()
}

impl Default for RepositoriesConfig {
    fn default() -> Self {
        Self {
            team_leads: default_team_leads(),
            sports_halls: default_sports_halls(),
        }
    }
}
