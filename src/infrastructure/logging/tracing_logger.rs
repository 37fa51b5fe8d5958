use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::ports::{Level, Logger};

/// [`Logger`] port adapter forwarding to `tracing` events.
///
/// Structured fields are rendered as one JSON object in the `fields` field.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Logger for TracingLogger {
    async fn log(&self, level: Level, message: &str, fields: HashMap<String, Value>) {
        let fields = Value::Object(fields.into_iter().collect());
        match level {
            Level::Trace => tracing::trace!(fields = %fields, "{message}"),
            Level::Debug => tracing::debug!(fields = %fields, "{message}"),
            Level::Info => tracing::info!(fields = %fields, "{message}"),
            Level::Warn => tracing::warn!(fields = %fields, "{message}"),
            Level::Error => tracing::error!(fields = %fields, "{message}"),
        }
    }
}
