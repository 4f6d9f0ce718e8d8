//! Folder records.

use crate::entity::NamedEntity;
use crate::error::NamespaceError;
use crate::model::index::NameIndex;
use crate::types::{EntityKind, FileId, FolderId};

/// A container of subfolders and subfiles.
///
/// `parent` is a back-reference into the folder table and carries no ownership. It is
/// `None` for the root and for label-view folders, which live outside the tree.
#[derive(Debug, Clone)]
pub struct Folder {
    name: String,
    parent: Option<FolderId>,
    subfolders: NameIndex<FolderId>,
    subfiles: NameIndex<FileId>,
}

impl Folder {
    pub(crate) fn new(name: impl Into<String>, parent: Option<FolderId>) -> Self {
        Self {
            name: name.into(),
            parent,
            subfolders: NameIndex::new(),
            subfiles: NameIndex::new(),
        }
    }

    /// Attach an already-allocated child folder under `name`.
    pub fn make_subfolder(&mut self, name: &str, id: FolderId) -> Result<(), NamespaceError> {
        self.subfolders.insert(name, id)
    }

    /// Attach an already-allocated file under `name`.
    pub fn make_subfile(&mut self, name: &str, id: FileId) -> Result<(), NamespaceError> {
        self.subfiles.insert(name, id)
    }

    pub fn get_subfolder(&self, name: &str) -> Result<FolderId, NamespaceError> {
        self.subfolders
            .get(name)
            .ok_or_else(|| NamespaceError::not_found(EntityKind::Folder, name))
    }

    pub fn get_subfile(&self, name: &str) -> Result<FileId, NamespaceError> {
        self.subfiles
            .get(name)
            .ok_or_else(|| NamespaceError::not_found(EntityKind::File, name))
    }

    /// Detach a subfolder. Does not touch anything below it.
    pub fn remove_subfolder(&mut self, name: &str) -> Result<FolderId, NamespaceError> {
        self.subfolders
            .remove(name)
            .ok_or_else(|| NamespaceError::not_found(EntityKind::Folder, name))
    }

    /// Detach a subfile. Label membership is left alone.
    pub fn remove_subfile(&mut self, name: &str) -> Result<FileId, NamespaceError> {
        self.subfiles
            .remove(name)
            .ok_or_else(|| NamespaceError::not_found(EntityKind::File, name))
    }

    pub fn get_parent_folder(&self) -> Result<FolderId, NamespaceError> {
        self.parent.ok_or(NamespaceError::NoParent)
    }

    pub fn subfolders(&self) -> &NameIndex<FolderId> {
        &self.subfolders
    }

    pub fn subfiles(&self) -> &NameIndex<FileId> {
        &self.subfiles
    }

    pub(crate) fn subfolders_mut(&mut self) -> &mut NameIndex<FolderId> {
        &mut self.subfolders
    }

    pub(crate) fn subfiles_mut(&mut self) -> &mut NameIndex<FileId> {
        &mut self.subfiles
    }
}

impl NamedEntity for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
