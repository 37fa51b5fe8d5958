//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty console output on stderr
//! - Rolling JSON log files
//! - `Logger` port adapters (tracing-backed and recording)

pub mod config;
pub mod logger;
pub mod recording;
pub mod tracing_logger;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::LoggerImpl;
pub use recording::{LogEntry, RecordingLogger};
pub use tracing_logger::TracingLogger;
