//! Namespace records: folders, files and labels.
//!
//! Records hold identity and membership only. Cross-entity invariants (uniqueness across
//! scopes, deletion cascades, recency) are enforced by the
//! [`Namespace`](crate::namespace::Namespace) coordinator.

pub mod file;
pub mod folder;
pub mod index;
pub mod label;

pub use file::File;
pub use folder::Folder;
pub use index::NameIndex;
pub use label::Label;
