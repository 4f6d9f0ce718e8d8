//! Error types for the labeltree namespace.

use crate::types::EntityKind;
use thiserror::Error;

/// Recoverable failures of namespace operations.
///
/// Every operation either completes or fails with one of these before mutating anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    #[error("Name cannot be blank")]
    NameBlank,

    /// Carries the existing entry's true capitalization.
    #[error("Name already taken by \"{0}\"")]
    NameTaken(String),

    #[error("No {0} named \"{1}\"")]
    NotFound(EntityKind, String),

    #[error("Current folder has no parent")]
    NoParent,

    #[error("Path no longer exists: {0}")]
    PathInvalid(String),

    #[error("Label view \"{0}\" is read-only")]
    ReadOnlyView(String),

    #[error("Failed to open {path}: {reason}")]
    OpenFailed { path: String, reason: String },
}

impl NamespaceError {
    pub(crate) fn not_found(kind: EntityKind, name: &str) -> Self {
        NamespaceError::NotFound(kind, name.to_string())
    }
}

/// Snapshot storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Snapshot I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Snapshot encoding error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid snapshot path: {0}")]
    InvalidPath(String),
}

/// CLI/config surface errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Namespace(#[from] NamespaceError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
