//! In-memory log backend.
use std::sync::Mutex;

use super::types::{Level, Log};

/// A single captured message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Severity the message was logged at.
    pub level: Level,
    /// Message text.
    pub message: String,
}

/// Log backend that records messages instead of printing them.
///
/// Useful when embedding the engine in another program that renders its own
/// output, and in tests that assert on what was reported.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of every record in insertion order.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map_or_else(|_| Vec::new(), |guard| guard.clone())
    }

    /// Return the messages logged at `level`.
    #[must_use]
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }

    /// Return `true` if any message at `level` contains `needle`.
    #[must_use]
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages(level).iter().any(|m| m.contains(needle))
    }
}

impl Log for MemoryLog {
    fn log(&self, level: Level, msg: &str) {
        if let Ok(mut guard) = self.records.lock() {
            guard.push(LogRecord {
                level,
                message: msg.to_string(),
            });
        }
    }
}
