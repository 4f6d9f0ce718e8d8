//! Snapshot Store
//!
//! Reads and writes namespace snapshots. A store is an explicit value handed to whoever
//! needs persistence; there is no process-wide autosave location.

pub mod persistence;

pub use persistence::JsonSnapshotStore;

use crate::error::StorageError;
use crate::namespace::Namespace;
use crate::snapshot::NamespaceSnapshot;

/// Snapshot store interface
pub trait SnapshotStore {
    /// Load the stored snapshot, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<NamespaceSnapshot>, StorageError>;

    fn save(&self, snapshot: &NamespaceSnapshot) -> Result<(), StorageError>;

    /// Export `namespace` and save it.
    fn save_namespace(&self, namespace: &Namespace) -> Result<(), StorageError> {
        self.save(&namespace.export())
    }
}
