//! File-system persistence for the hunt config.
//!
//! Files live at `<root>/<namespace>/<filename>`.  With the binary's default
//! root this is `./config/hunt/config.json`.
//!
//! Writes go to `<filename>.tmp` first and are renamed over the target, so a
//! crash mid-write leaves either the old file or the new one, never a
//! truncated mix.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{FilePersistence, PersistenceError};

/// [`FilePersistence`] backed by `tokio::fs`.
#[derive(Debug, Clone)]
pub struct FsPersistence {
    root: PathBuf,
}

impl FsPersistence {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the full path of `namespace/filename` under the root.
    pub fn path_for(&self, namespace: &str, filename: &str) -> PathBuf {
        self.root.join(namespace).join(filename)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn temp_path(final_path: &Path) -> PathBuf {
    let mut temp = final_path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}

#[async_trait]
impl FilePersistence for FsPersistence {
    async fn read_file(
        &self,
        namespace: &str,
        filename: &str,
    ) -> Result<String, PersistenceError> {
        let path = self.path_for(namespace, filename);

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "read file");
                Ok(content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PersistenceError::NotFound { path })
            }
            Err(e) => Err(io_error(&path, e)),
        }
    }

    async fn write_file(
        &self,
        namespace: &str,
        filename: &str,
        content: &str,
    ) -> Result<(), PersistenceError> {
        let path = self.path_for(namespace, filename);

        // Ensure directory exists before writing.
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| io_error(dir, e))?;
        }

        let temp = temp_path(&path);
        tokio::fs::write(&temp, content)
            .await
            .map_err(|e| io_error(&temp, e))?;

        if let Err(e) = tokio::fs::rename(&temp, &path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(io_error(&path, e));
        }

        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
