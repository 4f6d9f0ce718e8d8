//! Workspace config file source: .labeltree/config.toml and .labeltree/{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Directory holding workspace-level configuration and the default snapshot.
pub fn workspace_config_dir(workspace_root: &Path) -> PathBuf {
    workspace_root.join(".labeltree")
}

/// Add workspace config files to builder.
/// Precedence: .labeltree/config.toml (base) then .labeltree/{LABELTREE_ENV}.toml.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_dir = workspace_config_dir(workspace_root);

    let base_config_path = config_dir.join("config.toml");
    if base_config_path.exists() {
        builder = builder.add_source(File::from(base_config_path.as_path()).required(false));
    }

    if let Ok(env_name) = std::env::var("LABELTREE_ENV") {
        let env_config_path = config_dir.join(format!("{}.toml", env_name));
        if env_config_path.exists() {
            builder = builder.add_source(File::from(env_config_path.as_path()).required(false));
        }
    }

    Ok(builder)
}
