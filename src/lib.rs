//! grifo library root.
//!
//! Shift-window and recurring-schedule resolution for the station console
//! (`core::calculator`), plus the configuration, journal and CLI layers
//! used by the `grifo` binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use utils::path::{expand_tilde, expand_tilde_string};

pub use crate::core::calculator::schedule::next_occurrence;
pub use crate::core::calculator::shift::resolve_window;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Shift { .. } => cli::commands::shift::handle(&cli.command, cfg),
        Commands::Schedule { .. } => cli::commands::schedule::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg, config_path),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    // `init` writes the configuration itself; everything else loads it once
    let mut cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load(Some(config_path.as_path()))?,
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = expand_tilde_string(custom_db);
    }

    dispatch(&cli, &cfg, &config_path)
}
