//! Namespace Coordinator
//!
//! Owns the folder tree, the file and label tables, the navigation cursor and the three
//! recency lists. Every structural change goes through here; this is the only place where
//! invariants spanning more than one entity are enforced.
//!
//! Checks run in a fixed order on every create and rename: blank name, then name taken,
//! then target not found. Nothing is mutated until all checks pass.

pub mod cursor;
pub mod persist;
pub mod query;
pub mod recent;
pub mod view;

pub use cursor::{LabelView, Location, NavState};
pub use recent::{RecencyList, RECENT_CAPACITY};

use crate::entity::NamedEntity;
use crate::error::NamespaceError;
use crate::host::FileHost;
use crate::model::{File, Folder, Label, NameIndex};
use crate::name;
use crate::types::{EntityKind, FileId, FolderId, IdAllocator, LabelId};
use std::collections::HashMap;
use tracing::debug;

/// Root folder name used by [`Namespace::default`].
pub const DEFAULT_ROOT_NAME: &str = "Root";

#[derive(Debug)]
pub struct Namespace {
    ids: IdAllocator,
    root: FolderId,
    folders: HashMap<FolderId, Folder>,
    files: HashMap<FileId, File>,
    labels: HashMap<LabelId, Label>,
    label_index: NameIndex<LabelId>,
    cursor: Location,
    recent_files: RecencyList<FileId>,
    recent_folders: RecencyList<FolderId>,
    recent_labels: RecencyList<LabelId>,
    tracking_enabled: bool,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::with_root(DEFAULT_ROOT_NAME)
    }
}

impl Namespace {
    /// Create an empty namespace whose root folder is called `root_name`.
    pub fn new(root_name: &str) -> Result<Self, NamespaceError> {
        if name::is_blank(root_name) {
            return Err(NamespaceError::NameBlank);
        }
        Ok(Self::with_root(root_name))
    }

    fn with_root(root_name: &str) -> Self {
        let mut ids = IdAllocator::default();
        let root = FolderId::new(ids.next_raw());
        let mut folders = HashMap::new();
        folders.insert(root, Folder::new(root_name, None));
        Self {
            ids,
            root,
            folders,
            files: HashMap::new(),
            labels: HashMap::new(),
            label_index: NameIndex::new(),
            cursor: Location::Folder(root),
            recent_files: RecencyList::new(),
            recent_folders: RecencyList::new(),
            recent_labels: RecencyList::new(),
            tracking_enabled: true,
        }
    }

    // --- entity access ---

    pub fn root(&self) -> FolderId {
        self.root
    }

    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.get(&id)
    }

    pub fn file(&self, id: FileId) -> Option<&File> {
        self.files.get(&id)
    }

    pub fn label(&self, id: LabelId) -> Option<&Label> {
        self.labels.get(&id)
    }

    pub fn label_id(&self, name: &str) -> Option<LabelId> {
        self.label_index.get(name)
    }

    pub fn cursor(&self) -> &Location {
        &self.cursor
    }

    pub(crate) fn folder_ref(&self, id: FolderId) -> Result<&Folder, NamespaceError> {
        self.folders
            .get(&id)
            .ok_or_else(|| NamespaceError::not_found(EntityKind::Folder, &id.to_string()))
    }

    fn folder_mut(&mut self, id: FolderId) -> Result<&mut Folder, NamespaceError> {
        self.folders
            .get_mut(&id)
            .ok_or_else(|| NamespaceError::not_found(EntityKind::Folder, &id.to_string()))
    }

    pub(crate) fn file_ref(&self, id: FileId) -> Result<&File, NamespaceError> {
        self.files
            .get(&id)
            .ok_or_else(|| NamespaceError::not_found(EntityKind::File, &id.to_string()))
    }

    /// The folder the cursor points at: a real folder or the label view's ephemeral one.
    pub fn current_folder(&self) -> Result<&Folder, NamespaceError> {
        match &self.cursor {
            Location::Folder(id) => self.folder_ref(*id),
            Location::LabelView(view) => Ok(&view.folder),
        }
    }

    /// The real folder behind the cursor: itself, or the folder a label view was opened
    /// from.
    pub(crate) fn real_location(&self) -> FolderId {
        match &self.cursor {
            Location::Folder(id) => *id,
            Location::LabelView(view) => view.origin,
        }
    }

    fn current_real_folder(&self) -> Result<FolderId, NamespaceError> {
        match &self.cursor {
            Location::Folder(id) => Ok(*id),
            Location::LabelView(view) => {
                Err(NamespaceError::ReadOnlyView(view.folder.name().to_string()))
            }
        }
    }

    // --- folders ---

    /// Create a folder inside the current folder.
    pub fn create_folder(&mut self, name: &str) -> Result<FolderId, NamespaceError> {
        if name::is_blank(name) {
            return Err(NamespaceError::NameBlank);
        }
        let parent = self.current_real_folder()?;
        self.create_folder_in(parent, name)
    }

    pub(crate) fn create_folder_in(
        &mut self,
        parent: FolderId,
        name: &str,
    ) -> Result<FolderId, NamespaceError> {
        let id = FolderId::new(self.ids.next_raw());
        self.folder_mut(parent)?.make_subfolder(name, id)?;
        self.folders.insert(id, Folder::new(name, Some(parent)));
        debug!(folder = %name, %id, %parent, "Created folder");
        Ok(id)
    }

    /// Rename a subfolder of the current folder.
    pub fn rename_folder(&mut self, old: &str, new: &str) -> Result<(), NamespaceError> {
        if name::is_blank(new) {
            return Err(NamespaceError::NameBlank);
        }
        let current = self.current_folder()?;
        if let Some(existing) = current.subfolders().true_name(new) {
            if !name::names_equal(old, new) {
                return Err(NamespaceError::NameTaken(existing.to_string()));
            }
        }
        let id = current.get_subfolder(old)?;
        // Label views never hold subfolders, so a found folder is always in the tree.
        let parent = self.current_real_folder()?;
        self.folder_mut(parent)?.subfolders_mut().rekey(old, new);
        self.folder_mut(id)?.rename(new);
        debug!(%old, %new, %id, "Renamed folder");
        Ok(())
    }

    /// Delete a subfolder of the current folder together with everything below it.
    pub fn delete_folder(&mut self, name: &str) -> Result<(), NamespaceError> {
        let id = self.current_folder()?.get_subfolder(name)?;
        let parent = self.current_real_folder()?;
        self.folder_mut(parent)?.remove_subfolder(name)?;

        let mut pending = vec![id];
        let mut removed_files = 0usize;
        while let Some(folder_id) = pending.pop() {
            let Some(folder) = self.folders.remove(&folder_id) else {
                continue;
            };
            pending.extend(folder.subfolders().ids());
            for file_id in folder.subfiles().ids() {
                self.purge_file(file_id);
                removed_files += 1;
            }
            self.recent_folders.remove(folder_id);
        }
        debug!(folder = %name, %id, removed_files, "Deleted folder");
        Ok(())
    }

    // --- files ---

    /// Create a file inside the current folder.
    pub fn create_file(&mut self, name: &str, path: &str) -> Result<FileId, NamespaceError> {
        if name::is_blank(name) {
            return Err(NamespaceError::NameBlank);
        }
        let parent = self.current_real_folder()?;
        self.create_file_in(parent, name, path)
    }

    pub(crate) fn create_file_in(
        &mut self,
        parent: FolderId,
        name: &str,
        path: &str,
    ) -> Result<FileId, NamespaceError> {
        let id = FileId::new(self.ids.next_raw());
        self.folder_mut(parent)?.make_subfile(name, id)?;
        self.files.insert(id, File::new(id, name, path, parent));
        debug!(file = %name, %id, %parent, "Created file");
        Ok(id)
    }

    /// Rename a file visible in the current folder.
    ///
    /// Inside a label view the new name must also be free in the file's real folder.
    pub fn rename_file(&mut self, old: &str, new: &str) -> Result<(), NamespaceError> {
        if name::is_blank(new) {
            return Err(NamespaceError::NameBlank);
        }
        let current = self.current_folder()?;
        if let Some(existing) = current.subfiles().true_name(new) {
            if !name::names_equal(old, new) {
                return Err(NamespaceError::NameTaken(existing.to_string()));
            }
        }
        let id = current.get_subfile(old)?;
        let file = self.file_ref(id)?;
        let stored = file.name().to_string();
        let parent = file.parent_folder();

        let parent_folder = self.folder_ref(parent)?;
        if let Some(owner) = parent_folder.subfiles().get(new) {
            if owner != id {
                let existing = parent_folder.subfiles().true_name(new).unwrap_or(new);
                return Err(NamespaceError::NameTaken(existing.to_string()));
            }
        }

        self.folder_mut(parent)?.subfiles_mut().rekey(&stored, new);
        if let Location::LabelView(view) = &mut self.cursor {
            view.folder.subfiles_mut().rekey(&stored, new);
        }
        if let Some(file) = self.files.get_mut(&id) {
            file.rename(new);
        }
        debug!(%old, %new, %id, "Renamed file");
        Ok(())
    }

    /// Delete a file visible in the current folder.
    ///
    /// The file is detached from its real parent, from the label view if the cursor is
    /// one, from every label and from the file recency list.
    pub fn delete_file(&mut self, name: &str) -> Result<(), NamespaceError> {
        let id = self.current_folder()?.get_subfile(name)?;
        let parent = self.file_ref(id)?.parent_folder();
        self.folder_mut(parent)?.subfiles_mut().remove_id(id);
        if let Location::LabelView(view) = &mut self.cursor {
            view.folder.subfiles_mut().remove_id(id);
        }
        self.purge_file(id);
        debug!(file = %name, %id, %parent, "Deleted file");
        Ok(())
    }

    /// Drop a file record along with its label memberships and recency entry.
    fn purge_file(&mut self, id: FileId) {
        let Some(mut file) = self.files.remove(&id) else {
            return;
        };
        let carried: Vec<LabelId> = file.labels().collect();
        for label_id in carried {
            if let Some(label) = self.labels.get_mut(&label_id) {
                label.unlabel_file(&mut file);
            }
        }
        self.recent_files.remove(id);
    }

    /// Open a file visible in the current folder through `host`.
    ///
    /// Nothing is recorded when the host reports the path missing.
    pub fn open_file(&mut self, name: &str, host: &dyn FileHost) -> Result<(), NamespaceError> {
        let id = self.current_folder()?.get_subfile(name)?;
        self.open_file_id(id, host)
    }

    fn open_file_id(&mut self, id: FileId, host: &dyn FileHost) -> Result<(), NamespaceError> {
        let path = self.file_ref(id)?.path().to_string();
        if !host.path_exists(&path) {
            return Err(NamespaceError::PathInvalid(path));
        }
        self.record_file(id);
        host.open(&path).map_err(|e| NamespaceError::OpenFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        debug!(%id, %path, "Opened file");
        Ok(())
    }

    // --- labels ---

    pub fn create_label(&mut self, name: &str) -> Result<LabelId, NamespaceError> {
        let id = LabelId::new(self.ids.next_raw());
        self.label_index.insert(name, id)?;
        self.labels.insert(id, Label::new(id, name));
        debug!(label = %name, %id, "Created label");
        Ok(id)
    }

    pub fn rename_label(&mut self, old: &str, new: &str) -> Result<(), NamespaceError> {
        if name::is_blank(new) {
            return Err(NamespaceError::NameBlank);
        }
        if let Some(existing) = self.label_index.true_name(new) {
            if !name::names_equal(old, new) {
                return Err(NamespaceError::NameTaken(existing.to_string()));
            }
        }
        let id = self
            .label_index
            .get(old)
            .ok_or_else(|| NamespaceError::not_found(EntityKind::Label, old))?;
        self.label_index.rekey(old, new);
        if let Some(label) = self.labels.get_mut(&id) {
            label.rename(new);
        }
        if let Location::LabelView(view) = &mut self.cursor {
            if view.label == id {
                view.folder.rename(new);
            }
        }
        debug!(%old, %new, %id, "Renamed label");
        Ok(())
    }

    /// Delete a label, removing it from every file that carries it. A view of the label
    /// closes back to the folder it was opened from.
    pub fn delete_label(&mut self, name: &str) -> Result<(), NamespaceError> {
        let id = self
            .label_index
            .get(name)
            .ok_or_else(|| NamespaceError::not_found(EntityKind::Label, name))?;
        if let Some(label) = self.labels.get_mut(&id) {
            label.unlabel_all_files(&mut self.files);
        }
        if let Location::LabelView(view) = &self.cursor {
            if view.label == id {
                self.cursor = Location::Folder(view.origin);
            }
        }
        self.recent_labels.remove(id);
        self.label_index.remove(name);
        self.labels.remove(&id);
        debug!(label = %name, %id, "Deleted label");
        Ok(())
    }

    /// Attach label `label_name` to the file `file_name` in the current folder.
    pub fn label_file(&mut self, file_name: &str, label_name: &str) -> Result<(), NamespaceError> {
        let (file_id, label_id) = self.resolve_file_and_label(file_name, label_name)?;
        self.label_file_ids(file_id, label_id);
        debug!(file = %file_name, label = %label_name, "Labelled file");
        Ok(())
    }

    pub fn unlabel_file(
        &mut self,
        file_name: &str,
        label_name: &str,
    ) -> Result<(), NamespaceError> {
        let (file_id, label_id) = self.resolve_file_and_label(file_name, label_name)?;
        if let (Some(label), Some(file)) =
            (self.labels.get_mut(&label_id), self.files.get_mut(&file_id))
        {
            label.unlabel_file(file);
        }
        if let Location::LabelView(view) = &mut self.cursor {
            if view.label == label_id {
                view.folder.subfiles_mut().remove_id(file_id);
            }
        }
        debug!(file = %file_name, label = %label_name, "Unlabelled file");
        Ok(())
    }

    pub(crate) fn label_file_ids(&mut self, file_id: FileId, label_id: LabelId) {
        if let (Some(label), Some(file)) =
            (self.labels.get_mut(&label_id), self.files.get_mut(&file_id))
        {
            label.label_file(file);
        }
    }

    fn resolve_file_and_label(
        &self,
        file_name: &str,
        label_name: &str,
    ) -> Result<(FileId, LabelId), NamespaceError> {
        let file_id = self.current_folder()?.get_subfile(file_name)?;
        let label_id = self
            .label_index
            .get(label_name)
            .ok_or_else(|| NamespaceError::not_found(EntityKind::Label, label_name))?;
        Ok((file_id, label_id))
    }

    // --- navigation ---

    /// Move into a subfolder of the current folder.
    pub fn open_folder(&mut self, name: &str) -> Result<(), NamespaceError> {
        let id = self.current_folder()?.get_subfolder(name)?;
        self.cursor = Location::Folder(id);
        self.record_folder(id);
        Ok(())
    }

    /// Move to the parent folder. Fails at the root and inside a label view.
    pub fn go_up_one_level(&mut self) -> Result<(), NamespaceError> {
        let parent = self.current_folder()?.get_parent_folder()?;
        self.cursor = Location::Folder(parent);
        Ok(())
    }

    /// Reset the cursor to the root. Recency lists are untouched.
    pub fn open_root_folder(&mut self) {
        self.cursor = Location::Folder(self.root);
    }

    pub fn open_recent_folder(&mut self, name: &str) -> Result<(), NamespaceError> {
        let id = self
            .recent_folders
            .iter()
            .find(|id| self.folders.get(id).is_some_and(|f| f.name_equals(name)))
            .ok_or_else(|| NamespaceError::not_found(EntityKind::Folder, name))?;
        self.cursor = Location::Folder(id);
        self.record_folder(id);
        Ok(())
    }

    pub fn open_recent_file(
        &mut self,
        name: &str,
        host: &dyn FileHost,
    ) -> Result<(), NamespaceError> {
        let id = self
            .recent_files
            .iter()
            .find(|id| self.files.get(id).is_some_and(|f| f.name_equals(name)))
            .ok_or_else(|| NamespaceError::not_found(EntityKind::File, name))?;
        self.open_file_id(id, host)
    }

    pub fn open_recent_label(&mut self, name: &str) -> Result<(), NamespaceError> {
        let id = self
            .recent_labels
            .iter()
            .find(|id| self.labels.get(id).is_some_and(|l| l.name_equals(name)))
            .ok_or_else(|| NamespaceError::not_found(EntityKind::Label, name))?;
        self.open_label_id(id)
    }

    pub fn nav_state(&self) -> NavState {
        match &self.cursor {
            Location::Folder(id) if *id == self.root => NavState::AtRoot,
            Location::Folder(_) => NavState::AtRegularFolder,
            Location::LabelView(_) => NavState::AtLabelView,
        }
    }

    pub fn is_at_root(&self) -> bool {
        self.nav_state() == NavState::AtRoot
    }

    pub fn is_in_label_view(&self) -> bool {
        self.nav_state() == NavState::AtLabelView
    }

    // --- recency ---

    pub fn is_tracking_enabled(&self) -> bool {
        self.tracking_enabled
    }

    /// Turning tracking back on neither backfills nor clears history.
    pub fn set_tracking_enabled(&mut self, enabled: bool) {
        self.tracking_enabled = enabled;
    }

    fn record_file(&mut self, id: FileId) {
        if self.tracking_enabled {
            self.recent_files.touch(id);
        }
    }

    fn record_folder(&mut self, id: FolderId) {
        if self.tracking_enabled {
            self.recent_folders.touch(id);
        }
    }

    fn record_label(&mut self, id: LabelId) {
        if self.tracking_enabled {
            self.recent_labels.touch(id);
        }
    }

    pub fn recent_files(&self) -> &RecencyList<FileId> {
        &self.recent_files
    }

    pub fn recent_folders(&self) -> &RecencyList<FolderId> {
        &self.recent_folders
    }

    pub fn recent_labels(&self) -> &RecencyList<LabelId> {
        &self.recent_labels
    }
}
