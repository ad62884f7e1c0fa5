//! In-memory persistence for tests.
//!
//! Lets tests seed `config.json` content, force write failures, and count how
//! many reads and writes the config store performed, without touching disk.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{FilePersistence, PersistenceError};

/// A mock implementation of [`FilePersistence`] backed by a `HashMap`.
#[derive(Clone, Default)]
pub struct MemoryPersistence {
    files: Arc<Mutex<HashMap<(String, String), String>>>,
    reads: Arc<Mutex<u32>>,
    writes: Arc<Mutex<u32>>,
    fail_writes: bool,
}

impl MemoryPersistence {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose every write fails with a permission error.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Seeds `namespace/filename` with `content`.
    pub fn with_file(self, namespace: &str, filename: &str, content: &str) -> Self {
        self.files.lock().expect("lock poisoned").insert(
            (namespace.to_string(), filename.to_string()),
            content.to_string(),
        );
        self
    }

    /// Returns the current content of `namespace/filename`, if any.
    pub fn file(&self, namespace: &str, filename: &str) -> Option<String> {
        self.files
            .lock()
            .expect("lock poisoned")
            .get(&(namespace.to_string(), filename.to_string()))
            .cloned()
    }

    /// Number of `read_file` calls so far.
    pub fn read_count(&self) -> u32 {
        *self.reads.lock().expect("lock poisoned")
    }

    /// Number of `write_file` calls so far, failed ones included.
    pub fn write_count(&self) -> u32 {
        *self.writes.lock().expect("lock poisoned")
    }
}

fn virtual_path(namespace: &str, filename: &str) -> PathBuf {
    PathBuf::from(namespace).join(filename)
}

#[async_trait]
impl FilePersistence for MemoryPersistence {
    async fn read_file(
        &self,
        namespace: &str,
        filename: &str,
    ) -> Result<String, PersistenceError> {
        *self.reads.lock().expect("lock poisoned") += 1;
        self.file(namespace, filename)
            .ok_or_else(|| PersistenceError::NotFound {
                path: virtual_path(namespace, filename),
            })
    }

    async fn write_file(
        &self,
        namespace: &str,
        filename: &str,
        content: &str,
    ) -> Result<(), PersistenceError> {
        *self.writes.lock().expect("lock poisoned") += 1;
        if self.fail_writes {
            return Err(PersistenceError::Io {
                path: virtual_path(namespace, filename),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "injected write failure",
                ),
            });
        }
        self.files.lock().expect("lock poisoned").insert(
            (namespace.to_string(), filename.to_string()),
            content.to_string(),
        );
        Ok(())
    }
}
