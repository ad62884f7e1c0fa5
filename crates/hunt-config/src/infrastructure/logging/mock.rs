//! Recording event log for tests.

use std::sync::{Arc, Mutex};

use crate::application::ports::{EventLog, LogLevel};

/// A mock implementation of [`EventLog`] that keeps every entry in order.
#[derive(Clone, Default)]
pub struct RecordingLog {
    entries: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries so far.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().expect("lock poisoned").clone()
    }

    /// Number of entries at `level`.
    pub fn count(&self, level: LogLevel) -> usize {
        self.entries
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    /// Returns `true` if some entry at `level` contains `needle`.
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.entries
            .lock()
            .expect("lock poisoned")
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }
}

impl EventLog for RecordingLog {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries
            .lock()
            .expect("lock poisoned")
            .push((level, message.to_string()));
    }
}
