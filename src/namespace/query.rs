//! Read-only queries used by front ends: listings, existence and capitalization checks,
//! and folder path resolution.

use super::{Location, Namespace};
use crate::entity::NamedEntity;
use crate::error::NamespaceError;
use crate::types::{EntityKind, FileId, FolderId};

impl Namespace {
    pub fn current_folder_name(&self) -> String {
        self.current_folder()
            .map(|f| f.name().to_string())
            .unwrap_or_default()
    }

    /// Folder names from below the root down to the cursor. Empty at the root and in a
    /// label view.
    pub fn current_path(&self) -> Vec<String> {
        match self.cursor() {
            Location::Folder(id) => self.folder_path(*id),
            Location::LabelView(_) => Vec::new(),
        }
    }

    pub fn subfolder_names(&self) -> Vec<String> {
        self.current_folder()
            .map(|f| f.subfolders().names().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn subfile_names(&self) -> Vec<String> {
        self.current_folder()
            .map(|f| f.subfiles().names().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Every label in the registry, alphabetically.
    pub fn label_names(&self) -> Vec<String> {
        self.label_index.names().map(str::to_string).collect()
    }

    pub fn labels_of_file(&self, file_name: &str) -> Result<Vec<String>, NamespaceError> {
        let id = self.current_folder()?.get_subfile(file_name)?;
        let file = self.file_ref(id)?;
        Ok(self
            .label_index
            .ids()
            .filter(|label| file.is_labelled_with(*label))
            .filter_map(|label| self.label(label).map(|l| l.name().to_string()))
            .collect())
    }

    pub fn labels_not_on_file(&self, file_name: &str) -> Result<Vec<String>, NamespaceError> {
        let id = self.current_folder()?.get_subfile(file_name)?;
        let file = self.file_ref(id)?;
        Ok(self
            .label_index
            .ids()
            .filter(|label| !file.is_labelled_with(*label))
            .filter_map(|label| self.label(label).map(|l| l.name().to_string()))
            .collect())
    }

    pub fn recent_file_names(&self) -> Vec<String> {
        self.recent_files()
            .iter()
            .filter_map(|id| self.file(id).map(|f| f.name().to_string()))
            .collect()
    }

    pub fn recent_folder_names(&self) -> Vec<String> {
        self.recent_folders()
            .iter()
            .filter_map(|id| self.folder(id).map(|f| f.name().to_string()))
            .collect()
    }

    pub fn recent_label_names(&self) -> Vec<String> {
        self.recent_labels()
            .iter()
            .filter_map(|id| self.label(id).map(|l| l.name().to_string()))
            .collect()
    }

    pub fn has_subfolder(&self, name: &str) -> bool {
        self.subfolder_capitalization(name).is_some()
    }

    pub fn has_subfile(&self, name: &str) -> bool {
        self.subfile_capitalization(name).is_some()
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.label_index.contains(name)
    }

    /// True capitalization of a subfolder of the current folder.
    pub fn subfolder_capitalization(&self, name: &str) -> Option<String> {
        self.current_folder()
            .ok()?
            .subfolders()
            .true_name(name)
            .map(str::to_string)
    }

    pub fn subfile_capitalization(&self, name: &str) -> Option<String> {
        self.current_folder()
            .ok()?
            .subfiles()
            .true_name(name)
            .map(str::to_string)
    }

    pub fn label_capitalization(&self, name: &str) -> Option<String> {
        self.label_index.true_name(name).map(str::to_string)
    }

    /// Names of the folders from below the root down to `id`.
    pub fn folder_path(&self, id: FolderId) -> Vec<String> {
        let mut segments = Vec::new();
        let mut next = Some(id);
        while let Some(folder_id) = next {
            if folder_id == self.root() {
                break;
            }
            let Some(folder) = self.folder(folder_id) else {
                break;
            };
            segments.push(folder.name().to_string());
            next = folder.get_parent_folder().ok();
        }
        segments.reverse();
        segments
    }

    /// Folder segments followed by the file's own name.
    pub fn file_path_segments(&self, id: FileId) -> Option<Vec<String>> {
        let file = self.file(id)?;
        let mut segments = self.folder_path(file.parent_folder());
        segments.push(file.name().to_string());
        Some(segments)
    }

    /// Walk `segments` down from the root.
    pub fn resolve_folder_path(&self, segments: &[String]) -> Result<FolderId, NamespaceError> {
        let mut id = self.root();
        for segment in segments {
            id = self.folder_ref(id)?.get_subfolder(segment)?;
        }
        Ok(id)
    }

    pub fn resolve_file_path(&self, segments: &[String]) -> Result<FileId, NamespaceError> {
        let (name, folders) = segments
            .split_last()
            .ok_or_else(|| NamespaceError::not_found(EntityKind::File, ""))?;
        let folder = self.resolve_folder_path(folders)?;
        self.folder_ref(folder)?.get_subfile(name)
    }
}
