use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Log level enumeration for structured logging
///
/// Levels are ordered from most verbose (Trace) to most severe (Error).
///
/// # Examples
///
/// ```
/// use ttsync::domain::ports::Level;
///
/// assert!(Level::Error > Level::Info);
/// assert!(Level::Trace < Level::Debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Most verbose level - detailed trace information
    Trace,
    /// Debug information useful during development
    Debug,
    /// Informational messages about normal operations
    Info,
    /// Warning messages for potentially problematic situations
    Warn,
    /// Error messages for failure conditions
    Error,
}

impl Level {
    /// Returns the string representation of the log level
    ///
    /// ```
    /// use ttsync::domain::ports::Level;
    ///
    /// assert_eq!(Level::Warn.as_str(), "WARN");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Port trait for reporting non-fatal failures and diagnostics
///
/// Repositories receive a `Logger` at construction time and use it to report
/// problems they recover from (failed writes) or surface (failed loads).
/// Implementations must never fail and must not block the caller for long;
/// the sink is fire-and-forget from the repository's point of view.
///
/// Only [`log`](Logger::log) is required. The level helpers forward to it.
///
/// # Examples
///
/// ```
/// use ttsync::domain::ports::{Logger, Level};
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// async fn report(logger: &dyn Logger, locator: &str) {
///     let mut fields = HashMap::new();
///     fields.insert("locator".to_string(), json!(locator));
///     logger.error("Failed to persist collection", fields).await;
/// }
/// ```
#[async_trait]
pub trait Logger: Send + Sync {
    /// Log a message at the given level with structured fields
    async fn log(&self, level: Level, message: &str, fields: HashMap<String, Value>);

    /// Log a debug-level message
    async fn debug(&self, message: &str, fields: HashMap<String, Value>) {
        self.log(Level::Debug, message, fields).await;
    }

    /// Log an info-level message
    async fn info(&self, message: &str, fields: HashMap<String, Value>) {
        self.log(Level::Info, message, fields).await;
    }

    /// Log a warning-level message
    async fn warn(&self, message: &str, fields: HashMap<String, Value>) {
        self.log(Level::Warn, message, fields).await;
    }

    /// Log an error-level message
    async fn error(&self, message: &str, fields: HashMap<String, Value>) {
        self.log(Level::Error, message, fields).await;
    }
}
