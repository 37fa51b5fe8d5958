use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::ports::{Level, Logger};

/// One captured log call
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub fields: HashMap<String, Value>,
}

/// [`Logger`] that keeps every entry in memory for assertions.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in the order they were logged
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Entries at `Level::Error`
    pub fn errors(&self) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.level == Level::Error)
            .collect()
    }
}

#[async_trait]
impl Logger for RecordingLogger {
    async fn log(&self, level: Level, message: &str, fields: HashMap<String, Value>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogEntry {
                level,
                message: message.to_string(),
                fields,
            });
    }
}
