//! Config loading facade: assembles sources in precedence order and deserializes.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::LabeltreeConfig;
use config::{ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Entry point for loading [`LabeltreeConfig`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace: defaults, global file, workspace files, env.
    pub fn load(workspace_root: &Path) -> Result<LabeltreeConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config: LabeltreeConfig = builder
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from an explicit file, skipping global and workspace files.
    pub fn load_from_file(path: &Path) -> Result<LabeltreeConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// Location of the per-user configuration file, if the platform has one.
    pub fn xdg_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn environment() -> Environment {
        Environment::with_prefix("LABELTREE")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }
}
