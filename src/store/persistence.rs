//! JSON file persistence for namespace snapshots

use crate::error::StorageError;
use crate::snapshot::NamespaceSnapshot;
use crate::store::SnapshotStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File-backed [`SnapshotStore`] writing pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Option<NamespaceSnapshot>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path).map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to read snapshot from {:?}: {}", self.path, e),
            ))
        })?;
        let snapshot: NamespaceSnapshot = serde_json::from_slice(&bytes)?;
        info!(path = %self.path.display(), "Loaded namespace snapshot");
        Ok(Some(snapshot))
    }

    /// Write atomically through a temporary file and rename.
    fn save(&self, snapshot: &NamespaceSnapshot) -> Result<(), StorageError> {
        if self.path.as_os_str().is_empty() {
            return Err(StorageError::InvalidPath("empty snapshot path".to_string()));
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::IoError(std::io::Error::new(
                        e.kind(),
                        format!("Failed to create parent directory {:?}: {}", parent, e),
                    ))
                })?;
            }
        }

        let serialized = serde_json::to_vec_pretty(snapshot)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &serialized).map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to write snapshot to {:?}: {}", temp_path, e),
            ))
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file to {:?}: {}", self.path, e),
            ))
        })?;

        info!(path = %self.path.display(), bytes = serialized.len(), "Saved namespace snapshot");
        Ok(())
    }
}
