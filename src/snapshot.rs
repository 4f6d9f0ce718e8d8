//! Persisted snapshot shape.
//!
//! Field names serialize in camelCase. Paths inside the namespace are lists of names
//! below the root folder; a file path ends with the file's own name.

use serde::{Deserialize, Serialize};

/// Namespace path: folder names below the root, optionally ending in a file name.
pub type NamespacePath = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceSnapshot {
    #[serde(default)]
    pub current_folder_path: NamespacePath,
    /// Label whose view the cursor was in; `currentFolderPath` is then the folder the
    /// view was opened from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_label: Option<LabelRecord>,
    #[serde(default)]
    pub labels: Vec<LabelRecord>,
    #[serde(default)]
    pub recently_opened_file_paths: Vec<NamespacePath>,
    #[serde(default)]
    pub recently_opened_folder_paths: Vec<NamespacePath>,
    #[serde(default)]
    pub recently_opened_labels: Vec<LabelRecord>,
    pub root_folder: FolderRecord,
    #[serde(default = "default_tracking")]
    pub tracking_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

fn default_tracking() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRecord {
    pub name: String,
}

impl LabelRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub name: String,
    pub file_path: String,
    #[serde(default)]
    pub labels: Vec<LabelRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRecord {
    pub name: String,
    #[serde(default)]
    pub subfiles: Vec<FileRecord>,
    #[serde(default)]
    pub subfolders: Vec<FolderRecord>,
}

impl FolderRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subfiles: Vec::new(),
            subfolders: Vec::new(),
        }
    }

    /// Total files in this folder and below.
    pub fn file_count(&self) -> usize {
        self.subfiles.len()
            + self
                .subfolders
                .iter()
                .map(FolderRecord::file_count)
                .sum::<usize>()
    }
}
