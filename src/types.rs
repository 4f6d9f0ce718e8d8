//! Arena handles for namespace entities.
//!
//! Entities live in per-kind tables owned by a [`Namespace`](crate::namespace::Namespace).
//! Handles are plain indices allocated monotonically and never reused within one namespace.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(u64);

        impl $name {
            pub(crate) fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Handle to a folder in the real tree.
    FolderId,
    "folder"
);
entity_id!(
    /// Handle to a file record.
    FileId,
    "file"
);
entity_id!(
    /// Handle to a label in the global registry.
    LabelId,
    "label"
);

/// Which kind of entity an operation addressed; carried by `NotFound` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    File,
    Folder,
    Label,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::File => "file",
            EntityKind::Folder => "folder",
            EntityKind::Label => "label",
        };
        f.write_str(s)
    }
}

/// Monotonic id source shared by the three entity tables.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub(crate) fn next_raw(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}
