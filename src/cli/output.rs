//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, NamespaceError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Namespace(NamespaceError::NameTaken(existing)) => {
            format!("Error: an entry is already named \"{}\"", existing)
        }
        ApiError::Namespace(NamespaceError::PathInvalid(path)) => {
            format!("Error: {} no longer exists on disk", path)
        }
        other => format!("Error: {}", other),
    }
}
