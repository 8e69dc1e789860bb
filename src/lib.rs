//! shiftsheet library root.
//! Exposes the CLI parser, the high-level run() function, the shift report
//! builder and the .docx / .xlsx collaborators around it.

pub mod cli;
pub mod config;
pub mod core;
pub mod docx;
pub mod errors;
pub mod export;
pub mod report;
pub mod ui;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::File { .. } => cli::commands::file::handle(&cli.command, cfg),
        Commands::Inspect { .. } => cli::commands::inspect::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    // `init` must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    dispatch(&cli, &cfg, &config_path)
}
