// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Innkeeper - a console front desk for booking hotel rooms.
//!
//! This is the binary entry point.

mod doctor;
mod input;
mod shell;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use innkeeper_config::InnkeeperConfig;

/// Innkeeper - a console front desk for booking hotel rooms.
#[derive(Parser, Debug)]
#[command(name = "innkeeper", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Run the interactive booking menu (default).
    Shell,
    /// Check the configuration and the record stores without modifying them.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            innkeeper_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.level);
    tracing::debug!(hotel = %config.hotel.name, "config loaded");

    let outcome = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell::run_shell(&config).map(|()| true),
        Commands::Doctor { plain } => doctor::run_doctor(&config, plain),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(
    path: Option<&std::path::Path>,
) -> Result<InnkeeperConfig, Vec<innkeeper_config::ConfigError>> {
    match path {
        Some(path) => innkeeper_config::load_and_validate_path(path),
        None => innkeeper_config::load_and_validate(),
    }
}

/// Initialize the tracing subscriber on stderr so logs stay out of the menu.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("innkeeper={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
