//! Label view materialization.
//!
//! Opening a label builds a fresh parentless folder holding every member of the label.
//! Members are attached in the label's insertion order. When a member's name is already
//! used in the view, the file is renamed `"<name> (i)"` for the smallest `i >= 1` that is
//! free both in the view and in the file's real folder. The rename is applied to the file
//! record itself and survives leaving the view.

use super::{LabelView, Location, Namespace};
use crate::entity::NamedEntity;
use crate::error::NamespaceError;
use crate::model::Folder;
use crate::types::{EntityKind, FileId, FolderId, LabelId};
use tracing::debug;

impl Namespace {
    /// Materialize the view for label `name` and move the cursor into it.
    pub fn open_label(&mut self, name: &str) -> Result<(), NamespaceError> {
        let id = self
            .label_index
            .get(name)
            .ok_or_else(|| NamespaceError::not_found(EntityKind::Label, name))?;
        self.open_label_id(id)
    }

    pub(crate) fn open_label_id(&mut self, id: LabelId) -> Result<(), NamespaceError> {
        let origin = self.real_location();
        let view = self.materialize_label_view(id, origin)?;
        debug!(
            label = %view.folder.name(),
            files = view.folder.subfiles().len(),
            "Opened label view"
        );
        self.cursor = Location::LabelView(view);
        self.record_label(id);
        Ok(())
    }

    /// Build the view for `id`. The cursor is left alone.
    pub(crate) fn materialize_label_view(
        &mut self,
        id: LabelId,
        origin: FolderId,
    ) -> Result<LabelView, NamespaceError> {
        let label = self
            .labels
            .get(&id)
            .ok_or_else(|| NamespaceError::not_found(EntityKind::Label, &id.to_string()))?;
        let mut folder = Folder::new(label.name(), None);
        let members = label.members().to_vec();

        for file_id in members {
            let original = self.file_ref(file_id)?.name().to_string();
            if !folder.subfiles().contains(&original) {
                folder.make_subfile(&original, file_id)?;
                continue;
            }
            let differentiated = self.differentiate(&folder, file_id, &original)?;
            folder.make_subfile(&differentiated, file_id)?;
        }

        Ok(LabelView {
            label: id,
            folder,
            origin,
        })
    }

    /// Rename `file_id` to the first free `"<original> (i)"` and return the new name.
    fn differentiate(
        &mut self,
        view: &Folder,
        file_id: FileId,
        original: &str,
    ) -> Result<String, NamespaceError> {
        let parent = self.file_ref(file_id)?.parent_folder();
        let siblings = self.folder_ref(parent)?.subfiles();

        let mut i = 1u32;
        let candidate = loop {
            let candidate = format!("{} ({})", original, i);
            let free_in_view = !view.subfiles().contains(&candidate);
            let free_in_parent = siblings.get(&candidate).map_or(true, |owner| owner == file_id);
            if free_in_view && free_in_parent {
                break candidate;
            }
            i += 1;
        };

        if let Some(folder) = self.folders.get_mut(&parent) {
            folder.subfiles_mut().rekey(original, &candidate);
        }
        if let Some(file) = self.files.get_mut(&file_id) {
            file.rename(&candidate);
        }
        debug!(%file_id, %original, renamed = %candidate, "Differentiated label view entry");
        Ok(candidate)
    }
}
