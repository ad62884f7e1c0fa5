//! Event log infrastructure.
//!
//! [`TracingLog`] forwards config-store messages to the `tracing` subscriber
//! installed by `main`.  `tracing` has no fatal level, so fatal entries are
//! emitted at `ERROR` with a `fatal = true` field that log filters and
//! aggregators can key on.

use tracing::{error, info};

use crate::application::ports::{EventLog, LogLevel};

pub mod mock;

/// [`EventLog`] that writes through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl EventLog for TracingLog {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => info!(target: "hunt", "{message}"),
            LogLevel::Error => error!(target: "hunt", "{message}"),
            LogLevel::Fatal => error!(target: "hunt", fatal = true, "{message}"),
        }
    }
}
