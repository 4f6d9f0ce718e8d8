//! Configuration System
//!
//! Layered configuration: built-in defaults, the per-user global file, workspace files and
//! `LABELTREE__SECTION__KEY` environment variables, merged by the `config` crate and
//! deserialized into [`LabeltreeConfig`].

use crate::logging::LoggingConfig;
use crate::name;
use crate::namespace::DEFAULT_ROOT_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::workspace_config_dir;

/// Snapshot location used when none is configured, relative to the workspace root.
pub const DEFAULT_SNAPSHOT_PATH: &str = ".labeltree/namespace.json";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeltreeConfig {
    /// Settings for a freshly created namespace
    #[serde(default)]
    pub namespace: NamespaceConfig,

    /// Snapshot persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceConfig {
    /// Name given to the root folder when no snapshot exists yet
    #[serde(default = "default_root_name")]
    pub root_name: String,

    /// Whether recency tracking starts enabled for a new namespace
    #[serde(default = "default_true")]
    pub tracking_enabled: bool,
}

fn default_root_name() -> String {
    DEFAULT_ROOT_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            tracking_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Snapshot file; relative paths resolve against the workspace root
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Save the snapshot after every mutating command
    #[serde(default = "default_true")]
    pub autosave: bool,
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from(DEFAULT_SNAPSHOT_PATH)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            autosave: true,
        }
    }
}

impl StorageConfig {
    pub fn resolve_snapshot_path(&self, workspace_root: &Path) -> PathBuf {
        if self.snapshot_path.is_absolute() {
            self.snapshot_path.clone()
        } else {
            workspace_root.join(&self.snapshot_path)
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Namespace(String),
    Storage(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Namespace(msg) => write!(f, "Namespace: {}", msg),
            ValidationError::Storage(msg) => write!(f, "Storage: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl LabeltreeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if name::is_blank(&self.namespace.root_name) {
            errors.push(ValidationError::Namespace(
                "Root folder name cannot be blank".to_string(),
            ));
        }
        if self.storage.snapshot_path.as_os_str().is_empty() {
            errors.push(ValidationError::Storage(
                "Snapshot path cannot be empty".to_string(),
            ));
        }
        if !["json", "text"].contains(&self.logging.format.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Unknown log format '{}'",
                self.logging.format
            )));
        }
        if !["stdout", "stderr", "file"].contains(&self.logging.output.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Unknown log output '{}'",
                self.logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
