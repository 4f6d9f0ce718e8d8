//! Labels and the file/label membership relation.

use crate::entity::NamedEntity;
use crate::model::file::File;
use crate::types::{FileId, LabelId};
use std::collections::HashMap;

/// A named tag carried by any number of files.
///
/// Members are kept in the order they were labelled; label views iterate in that order.
#[derive(Debug, Clone)]
pub struct Label {
    id: LabelId,
    name: String,
    members: Vec<FileId>,
}

impl Label {
    pub(crate) fn new(id: LabelId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn id(&self) -> LabelId {
        self.id
    }

    pub fn members(&self) -> &[FileId] {
        &self.members
    }

    pub fn has_member(&self, file: FileId) -> bool {
        self.members.contains(&file)
    }

    /// Add `file` to this label and this label to `file`. Idempotent.
    pub fn label_file(&mut self, file: &mut File) {
        if !self.has_member(file.id()) {
            self.members.push(file.id());
        }
        file.add_label(self.id);
    }

    /// Symmetric removal. Idempotent.
    pub fn unlabel_file(&mut self, file: &mut File) {
        self.members.retain(|id| *id != file.id());
        file.remove_label(self.id);
    }

    /// Detach this label from every member, leaving it empty.
    pub fn unlabel_all_files(&mut self, files: &mut HashMap<FileId, File>) {
        for member in self.members.drain(..) {
            if let Some(file) = files.get_mut(&member) {
                file.remove_label(self.id);
            }
        }
    }
}

impl NamedEntity for Label {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
