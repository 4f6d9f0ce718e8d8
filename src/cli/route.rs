//! CLI route: single route table and run context. Dispatches to the namespace and
//! presentation.

use crate::cli::help::{command_name, is_mutating};
use crate::cli::parse::{Commands, LabelCommands, RecentKind, RecentTarget, TrackingState};
use crate::cli::presentation::{format_listing, format_location, format_names};
use crate::config::{ConfigLoader, LabeltreeConfig};
use crate::error::{ApiError, StorageError};
use crate::host::{FileHost, SystemHost};
use crate::namespace::Namespace;
use crate::store::{JsonSnapshotStore, SnapshotStore};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: configuration, snapshot store, the loaded
/// namespace and the host used to open files.
pub struct RunContext {
    workspace_root: PathBuf,
    config: LabeltreeConfig,
    store: JsonSnapshotStore,
    namespace: Namespace,
    host: Box<dyn FileHost>,
}

impl RunContext {
    /// Create run context from workspace root and optional config and snapshot paths.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        snapshot_path: Option<PathBuf>,
    ) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Self::with_host(workspace_root, config, snapshot_path, Box::new(SystemHost))
    }

    /// Create run context from an already loaded configuration and an explicit host.
    pub fn with_host(
        workspace_root: PathBuf,
        config: LabeltreeConfig,
        snapshot_path: Option<PathBuf>,
        host: Box<dyn FileHost>,
    ) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        let snapshot_path = snapshot_path
            .unwrap_or_else(|| config.storage.resolve_snapshot_path(&workspace_root));
        let store = JsonSnapshotStore::new(snapshot_path);
        let namespace = match store.load()? {
            Some(snapshot) => Namespace::restore(&snapshot)?,
            None => {
                info!(
                    path = %store.path().display(),
                    "No snapshot found, starting an empty namespace"
                );
                let mut ns = Namespace::new(&config.namespace.root_name)?;
                ns.set_tracking_enabled(config.namespace.tracking_enabled);
                ns
            }
        };

        Ok(Self {
            workspace_root,
            config,
            store,
            namespace,
            host,
        })
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn snapshot_path(&self) -> &Path {
        self.store.path()
    }

    /// Execute a CLI command via the single route table, saving afterwards when the
    /// command changed state and autosave is on.
    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        debug!(command = %name, "Executing command");
        let output = self.execute_inner(command)?;
        if is_mutating(command) && self.config.storage.autosave {
            self.store.save_namespace(&self.namespace)?;
        }
        Ok(output)
    }

    fn execute_inner(&mut self, command: &Commands) -> Result<String, ApiError> {
        let ns = &mut self.namespace;
        match command {
            Commands::Ls => Ok(format_listing(ns)),
            Commands::Pwd => Ok(format_location(ns)),
            Commands::Cd { name } => {
                ns.open_folder(name)?;
                Ok(format_location(ns))
            }
            Commands::Up => {
                ns.go_up_one_level()?;
                Ok(format_location(ns))
            }
            Commands::Root => {
                ns.open_root_folder();
                Ok(format_location(ns))
            }
            Commands::Mkdir { name } => {
                ns.create_folder(name)?;
                Ok(format!("Created folder \"{}\"", name))
            }
            Commands::Rmdir { name } => {
                let true_name = ns.subfolder_capitalization(name).unwrap_or_else(|| name.clone());
                ns.delete_folder(name)?;
                Ok(format!("Deleted folder \"{}\"", true_name))
            }
            Commands::RenameFolder { old, new } => {
                ns.rename_folder(old, new)?;
                Ok(format!("Renamed folder \"{}\" to \"{}\"", old, new))
            }
            Commands::Add { name, path } => {
                ns.create_file(name, path)?;
                Ok(format!("Added file \"{}\" -> {}", name, path))
            }
            Commands::Rm { name } => {
                let true_name = ns.subfile_capitalization(name).unwrap_or_else(|| name.clone());
                ns.delete_file(name)?;
                Ok(format!("Deleted file \"{}\"", true_name))
            }
            Commands::RenameFile { old, new } => {
                ns.rename_file(old, new)?;
                Ok(format!("Renamed file \"{}\" to \"{}\"", old, new))
            }
            Commands::Open { name } => {
                ns.open_file(name, self.host.as_ref())?;
                Ok(format!("Opened \"{}\"", name))
            }
            Commands::Label { command } => self.execute_label(command),
            Commands::Recent { kind } => Ok(match kind {
                RecentKind::Files => format_names("Recent files", &ns.recent_file_names()),
                RecentKind::Folders => format_names("Recent folders", &ns.recent_folder_names()),
                RecentKind::Labels => format_names("Recent labels", &ns.recent_label_names()),
            }),
            Commands::OpenRecent { target, name } => match target {
                RecentTarget::File => {
                    ns.open_recent_file(name, self.host.as_ref())?;
                    Ok(format!("Opened \"{}\"", name))
                }
                RecentTarget::Folder => {
                    ns.open_recent_folder(name)?;
                    Ok(format_location(ns))
                }
                RecentTarget::Label => {
                    ns.open_recent_label(name)?;
                    Ok(format_listing(ns))
                }
            },
            Commands::Tracking { state } => match state {
                TrackingState::On => {
                    ns.set_tracking_enabled(true);
                    Ok("Recency tracking enabled".to_string())
                }
                TrackingState::Off => {
                    ns.set_tracking_enabled(false);
                    Ok("Recency tracking disabled".to_string())
                }
                TrackingState::Status => Ok(format!(
                    "Recency tracking is {}",
                    if ns.is_tracking_enabled() { "on" } else { "off" }
                )),
            },
            Commands::Export { path } => {
                JsonSnapshotStore::new(path).save_namespace(ns)?;
                Ok(format!("Exported namespace to {}", path.display()))
            }
            Commands::Import { path } => {
                let snapshot = JsonSnapshotStore::new(path).load()?.ok_or_else(|| {
                    StorageError::InvalidPath(format!("No snapshot at {}", path.display()))
                })?;
                *ns = Namespace::restore(&snapshot)?;
                Ok(format!(
                    "Imported {} files from {}",
                    snapshot.root_folder.file_count(),
                    path.display()
                ))
            }
            Commands::Config => toml::to_string_pretty(&self.config)
                .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e))),
        }
    }

    fn execute_label(&mut self, command: &LabelCommands) -> Result<String, ApiError> {
        let ns = &mut self.namespace;
        match command {
            LabelCommands::Create { name } => {
                ns.create_label(name)?;
                Ok(format!("Created label \"{}\"", name))
            }
            LabelCommands::Delete { name } => {
                let true_name = ns.label_capitalization(name).unwrap_or_else(|| name.clone());
                ns.delete_label(name)?;
                Ok(format!("Deleted label \"{}\"", true_name))
            }
            LabelCommands::Rename { old, new } => {
                ns.rename_label(old, new)?;
                Ok(format!("Renamed label \"{}\" to \"{}\"", old, new))
            }
            LabelCommands::List => Ok(format_names("Labels", &ns.label_names())),
            LabelCommands::Open { name } => {
                ns.open_label(name)?;
                Ok(format_listing(ns))
            }
            LabelCommands::Apply { file, label } => {
                ns.label_file(file, label)?;
                Ok(format!("Labelled \"{}\" with \"{}\"", file, label))
            }
            LabelCommands::Remove { file, label } => {
                ns.unlabel_file(file, label)?;
                Ok(format!("Removed \"{}\" from \"{}\"", label, file))
            }
            LabelCommands::Of { file } => Ok(format_names(
                &format!("Labels on {}", file),
                &ns.labels_of_file(file)?,
            )),
            LabelCommands::Available { file } => Ok(format_names(
                &format!("Labels available for {}", file),
                &ns.labels_not_on_file(file)?,
            )),
        }
    }
}
