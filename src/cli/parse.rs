//! CLI parse: clap types for labeltree. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Labeltree CLI - virtual folders and labels over your files
#[derive(Parser, Debug)]
#[command(name = "labeltree")]
#[command(about = "Virtual folders and labels over your files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Snapshot file path (overrides storage.snapshot_path)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List subfolders and files of the current folder
    Ls,
    /// Show the current location
    Pwd,
    /// Move into a subfolder
    Cd { name: String },
    /// Move to the parent folder
    Up,
    /// Move to the root folder
    Root,
    /// Create a folder in the current folder
    Mkdir { name: String },
    /// Delete a folder and everything in it
    Rmdir { name: String },
    /// Rename a folder in the current folder
    RenameFolder { old: String, new: String },
    /// Add a file entry pointing at an external path
    Add { name: String, path: String },
    /// Delete a file entry
    Rm { name: String },
    /// Rename a file entry
    RenameFile { old: String, new: String },
    /// Open a file in the default viewer
    Open { name: String },
    /// Label commands
    Label {
        #[command(subcommand)]
        command: LabelCommands,
    },
    /// List recently opened entries
    Recent {
        #[arg(value_enum)]
        kind: RecentKind,
    },
    /// Reopen a recently opened entry by name
    OpenRecent {
        #[arg(value_enum)]
        target: RecentTarget,
        name: String,
    },
    /// Turn recency tracking on or off, or show its state
    Tracking {
        #[arg(value_enum)]
        state: TrackingState,
    },
    /// Write the namespace snapshot to a file
    Export { path: PathBuf },
    /// Replace the namespace with a snapshot file
    Import { path: PathBuf },
    /// Show the effective configuration
    Config,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum LabelCommands {
    /// Create a label
    Create { name: String },
    /// Delete a label, removing it from every file
    Delete { name: String },
    /// Rename a label
    Rename { old: String, new: String },
    /// List all labels
    List,
    /// Show every file carrying a label
    Open { name: String },
    /// Attach a label to a file in the current folder
    Apply { file: String, label: String },
    /// Detach a label from a file in the current folder
    Remove { file: String, label: String },
    /// Labels carried by a file
    Of { file: String },
    /// Labels a file does not carry yet
    Available { file: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentKind {
    Files,
    Folders,
    Labels,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentTarget {
    File,
    Folder,
    Label,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    On,
    Off,
    Status,
}
