//! Labeltree: Virtual Folders and Labels
//!
//! Maintains a hierarchy of named folders and files, independent of on-disk content,
//! annotated with user-defined labels. Any label can be browsed as a synthetic folder
//! holding every file that carries it.

pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod host;
pub mod logging;
pub mod model;
pub mod name;
pub mod namespace;
pub mod snapshot;
pub mod store;
pub mod types;

pub use error::NamespaceError;
pub use host::{FileHost, SystemHost};
pub use namespace::Namespace;
