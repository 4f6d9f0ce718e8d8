//! Export to and restore from [`NamespaceSnapshot`].
//!
//! Restoring replays the tree through the validated creation paths, so a snapshot that
//! breaks a naming invariant is rejected with the same error the live operation would give.

use super::{Location, Namespace};
use crate::entity::NamedEntity;
use crate::error::NamespaceError;
use crate::snapshot::{FileRecord, FolderRecord, LabelRecord, NamespaceSnapshot};
use crate::types::FolderId;
use chrono::Utc;
use tracing::{debug, warn};

impl Namespace {
    /// Export the namespace. A label-view cursor is exported as the folder the view was
    /// opened from plus the label's name.
    pub fn export(&self) -> NamespaceSnapshot {
        let current_label = match self.cursor() {
            Location::Folder(_) => None,
            Location::LabelView(view) => self
                .label(view.label)
                .map(|label| LabelRecord::new(label.name())),
        };
        NamespaceSnapshot {
            current_folder_path: self.folder_path(self.real_location()),
            current_label,
            labels: self.label_names().into_iter().map(LabelRecord::new).collect(),
            recently_opened_file_paths: self
                .recent_files()
                .iter()
                .filter_map(|id| self.file_path_segments(id))
                .collect(),
            recently_opened_folder_paths: self
                .recent_folders()
                .iter()
                .map(|id| self.folder_path(id))
                .collect(),
            recently_opened_labels: self
                .recent_label_names()
                .into_iter()
                .map(LabelRecord::new)
                .collect(),
            root_folder: self.export_folder(self.root()),
            tracking_enabled: self.is_tracking_enabled(),
            saved_at: Some(Utc::now().to_rfc3339()),
        }
    }

    fn export_folder(&self, id: FolderId) -> FolderRecord {
        let Some(folder) = self.folder(id) else {
            return FolderRecord::new("");
        };
        let subfiles = folder
            .subfiles()
            .ids()
            .filter_map(|file_id| self.file(file_id))
            .map(|file| FileRecord {
                name: file.name().to_string(),
                file_path: file.path().to_string(),
                labels: self
                    .label_index
                    .ids()
                    .filter(|label| file.is_labelled_with(*label))
                    .filter_map(|label| self.label(label))
                    .map(|label| LabelRecord::new(label.name()))
                    .collect(),
            })
            .collect();
        let subfolders = folder
            .subfolders()
            .ids()
            .map(|child| self.export_folder(child))
            .collect();
        FolderRecord {
            name: folder.name().to_string(),
            subfiles,
            subfolders,
        }
    }

    /// Rebuild a namespace from a snapshot.
    ///
    /// Labels referenced by files but absent from the registry are created. An
    /// unresolvable cursor path falls back to the root and unresolvable recent entries
    /// are dropped. A saved label view is rebuilt over the restored folder. Recency lists
    /// are replayed oldest first so their order survives.
    pub fn restore(snapshot: &NamespaceSnapshot) -> Result<Self, NamespaceError> {
        let mut ns = Namespace::new(&snapshot.root_folder.name)?;
        ns.tracking_enabled = false;

        for label in &snapshot.labels {
            ns.create_label(&label.name)?;
        }
        let root = ns.root();
        ns.restore_folder(root, &snapshot.root_folder)?;

        ns.cursor = match ns.resolve_folder_path(&snapshot.current_folder_path) {
            Ok(id) => Location::Folder(id),
            Err(e) => {
                warn!(
                    path = ?snapshot.current_folder_path,
                    error = %e,
                    "Snapshot cursor path not found, starting at root"
                );
                Location::Folder(root)
            }
        };
        if let Some(label) = &snapshot.current_label {
            match ns.label_index.get(&label.name) {
                Some(id) => {
                    let origin = ns.real_location();
                    let view = ns.materialize_label_view(id, origin)?;
                    ns.cursor = Location::LabelView(view);
                }
                None => warn!(
                    label = %label.name,
                    "Snapshot label view not found, staying in folder"
                ),
            }
        }

        for path in snapshot.recently_opened_folder_paths.iter().rev() {
            match ns.resolve_folder_path(path) {
                Ok(id) => ns.recent_folders.touch(id),
                Err(e) => debug!(?path, error = %e, "Dropping recent folder"),
            }
        }
        for path in snapshot.recently_opened_file_paths.iter().rev() {
            match ns.resolve_file_path(path) {
                Ok(id) => ns.recent_files.touch(id),
                Err(e) => debug!(?path, error = %e, "Dropping recent file"),
            }
        }
        for label in snapshot.recently_opened_labels.iter().rev() {
            match ns.label_index.get(&label.name) {
                Some(id) => ns.recent_labels.touch(id),
                None => debug!(label = %label.name, "Dropping recent label"),
            }
        }

        ns.tracking_enabled = snapshot.tracking_enabled;
        debug!(
            files = ns.files.len(),
            folders = ns.folders.len(),
            labels = ns.labels.len(),
            "Restored namespace from snapshot"
        );
        Ok(ns)
    }

    fn restore_folder(&mut self, id: FolderId, record: &FolderRecord) -> Result<(), NamespaceError> {
        for file in &record.subfiles {
            let file_id = self.create_file_in(id, &file.name, &file.file_path)?;
            for label in &file.labels {
                let label_id = match self.label_index.get(&label.name) {
                    Some(label_id) => label_id,
                    None => {
                        warn!(label = %label.name, file = %file.name, "Label missing from registry, creating it");
                        self.create_label(&label.name)?
                    }
                };
                self.label_file_ids(file_id, label_id);
            }
        }
        for child in &record.subfolders {
            let child_id = self.create_folder_in(id, &child.name)?;
            self.restore_folder(child_id, child)?;
        }
        Ok(())
    }
}
