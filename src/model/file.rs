//! File records.

use crate::entity::NamedEntity;
use crate::types::{FileId, FolderId, LabelId};
use std::collections::BTreeSet;

/// A leaf entry pointing at an external path.
///
/// The label set is only mutated through [`Label`](crate::model::Label) so both sides of
/// the membership relation change together.
#[derive(Debug, Clone)]
pub struct File {
    id: FileId,
    name: String,
    path: String,
    parent: FolderId,
    labels: BTreeSet<LabelId>,
}

impl File {
    pub(crate) fn new(
        id: FileId,
        name: impl Into<String>,
        path: impl Into<String>,
        parent: FolderId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
            parent,
            labels: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    /// External path, passed through untouched.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The real folder owning this file, never a label view.
    pub fn parent_folder(&self) -> FolderId {
        self.parent
    }

    pub fn labels(&self) -> impl Iterator<Item = LabelId> + '_ {
        self.labels.iter().copied()
    }

    pub fn is_labelled_with(&self, label: LabelId) -> bool {
        self.labels.contains(&label)
    }

    pub fn is_labelled(&self) -> bool {
        !self.labels.is_empty()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub(super) fn add_label(&mut self, label: LabelId) {
        self.labels.insert(label);
    }

    pub(super) fn remove_label(&mut self, label: LabelId) {
        self.labels.remove(&label);
    }
}

impl NamedEntity for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
