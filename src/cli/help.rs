//! CLI command-name contract for logging and the autosave decision.

use crate::cli::parse::{Commands, LabelCommands, TrackingState};

/// Command name string for log records (e.g. "mkdir", "label.apply").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Ls => "ls".to_string(),
        Commands::Pwd => "pwd".to_string(),
        Commands::Cd { .. } => "cd".to_string(),
        Commands::Up => "up".to_string(),
        Commands::Root => "root".to_string(),
        Commands::Mkdir { .. } => "mkdir".to_string(),
        Commands::Rmdir { .. } => "rmdir".to_string(),
        Commands::RenameFolder { .. } => "rename_folder".to_string(),
        Commands::Add { .. } => "add".to_string(),
        Commands::Rm { .. } => "rm".to_string(),
        Commands::RenameFile { .. } => "rename_file".to_string(),
        Commands::Open { .. } => "open".to_string(),
        Commands::Label { command } => format!("label.{}", label_command_name(command)),
        Commands::Recent { .. } => "recent".to_string(),
        Commands::OpenRecent { .. } => "open_recent".to_string(),
        Commands::Tracking { .. } => "tracking".to_string(),
        Commands::Export { .. } => "export".to_string(),
        Commands::Import { .. } => "import".to_string(),
        Commands::Config => "config".to_string(),
    }
}

pub fn label_command_name(command: &LabelCommands) -> &'static str {
    match command {
        LabelCommands::Create { .. } => "create",
        LabelCommands::Delete { .. } => "delete",
        LabelCommands::Rename { .. } => "rename",
        LabelCommands::List => "list",
        LabelCommands::Open { .. } => "open",
        LabelCommands::Apply { .. } => "apply",
        LabelCommands::Remove { .. } => "remove",
        LabelCommands::Of { .. } => "of",
        LabelCommands::Available { .. } => "available",
    }
}

/// Whether the command can change what a snapshot would contain.
///
/// Opening entries counts: it moves the cursor or updates recency lists.
pub fn is_mutating(command: &Commands) -> bool {
    match command {
        Commands::Ls
        | Commands::Pwd
        | Commands::Recent { .. }
        | Commands::Export { .. }
        | Commands::Config => false,
        Commands::Tracking { state } => *state != TrackingState::Status,
        Commands::Label { command } => !matches!(
            command,
            LabelCommands::List | LabelCommands::Of { .. } | LabelCommands::Available { .. }
        ),
        _ => true,
    }
}
