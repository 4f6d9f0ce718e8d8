//! Merge rules: defaults, override order, conflict handling.

use crate::config::DEFAULT_SNAPSHOT_PATH;
use crate::namespace::DEFAULT_ROOT_NAME;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override earlier ones key by key: defaults, global file, workspace
/// files, then `LABELTREE__SECTION__KEY` environment variables.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("namespace.root_name", DEFAULT_ROOT_NAME)?
        .set_default("namespace.tracking_enabled", true)?
        .set_default("storage.snapshot_path", DEFAULT_SNAPSHOT_PATH)?
        .set_default("storage.autosave", true)
}
