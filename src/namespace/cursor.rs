//! Navigation cursor.

use crate::model::Folder;
use crate::types::{FolderId, LabelId};

/// An ephemeral, parentless folder listing every file carrying one label.
///
/// The folder is never attached to the tree; its subfile entries point at the real file
/// records, under their (possibly differentiated) display names. `origin` is the real
/// folder the view was opened from.
#[derive(Debug, Clone)]
pub struct LabelView {
    pub(crate) label: LabelId,
    pub(crate) folder: Folder,
    pub(crate) origin: FolderId,
}

impl LabelView {
    pub fn label(&self) -> LabelId {
        self.label
    }

    pub fn origin(&self) -> FolderId {
        self.origin
    }

    pub fn folder(&self) -> &Folder {
        &self.folder
    }
}

/// Where the cursor currently points.
#[derive(Debug, Clone)]
pub enum Location {
    Folder(FolderId),
    LabelView(LabelView),
}

/// Navigation state derived from the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    AtRoot,
    AtRegularFolder,
    AtLabelView,
}
