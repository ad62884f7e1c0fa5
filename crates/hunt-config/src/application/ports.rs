//! Collaborator traits the config store depends on.
//!
//! Both are injected at construction time so the store never touches the
//! file system or a logging backend directly.  Production implementations
//! live in `infrastructure`; tests use recording doubles or `mockall` mocks.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for [`FilePersistence`] operations.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The requested file does not exist.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Any other file-system failure.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Async read/write of named files inside a namespace directory.
///
/// A namespace is a single directory name (e.g. `"hunt"`) under the
/// implementation's root.  No locking is implied: two writers racing on the
/// same file are not coordinated.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilePersistence: Send + Sync {
    /// Returns the full text of `namespace/filename`.
    async fn read_file(&self, namespace: &str, filename: &str)
        -> Result<String, PersistenceError>;

    /// Replaces `namespace/filename` with `content`, creating the namespace
    /// directory when needed.
    async fn write_file(
        &self,
        namespace: &str,
        filename: &str,
        content: &str,
    ) -> Result<(), PersistenceError>;
}

/// Severity of an [`EventLog`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
    /// The component could not do its job; the process keeps running.
    Fatal,
}

/// Sink for the messages an operator is expected to read.
#[cfg_attr(test, mockall::automock)]
pub trait EventLog: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}
