//! Labeltree CLI Binary
//!
//! Command-line interface for browsing and labelling a virtual folder hierarchy.

use anyhow::Context;
use clap::Parser;
use labeltree::cli::{Cli, RunContext};
use labeltree::config::ConfigLoader;
use labeltree::logging::{init_logging, resolve_log_file_path, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Labeltree CLI starting");

    let mut context = match RunContext::new(
        cli.workspace.clone(),
        cli.config.clone(),
        cli.snapshot.clone(),
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing namespace: {}", e);
            eprintln!("{}", labeltree::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", labeltree::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Logging settings from the config file, falling back to defaults if it cannot be read.
fn load_logging_section(cli: &Cli) -> anyhow::Result<LoggingConfig> {
    let config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => ConfigLoader::load(&cli.workspace)
            .with_context(|| format!("loading config for {}", cli.workspace.display()))?,
    };
    Ok(config.logging)
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = load_logging_section(cli).unwrap_or_else(|e| {
        eprintln!("Warning: {:#}; using default logging", e);
        LoggingConfig::default()
    });

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if config.output == "file" {
        if let Ok(path) = resolve_log_file_path(cli.log_file.clone(), config.file.clone()) {
            config.file = Some(path);
        }
    } else if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
