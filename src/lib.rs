//! bikeshare library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Explore) => cli::commands::explore::handle(cfg),
        Some(cmd @ Commands::Init { .. }) => cli::commands::init::handle(cmd, cfg, config_path),
        Some(cmd @ Commands::Config { .. }) => {
            cli::commands::config::handle(cmd, cfg, config_path)
        }
        Some(Commands::Cities) => cli::commands::cities::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, from --config or the default location
    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load_from(&config_path)?;

    // 3️⃣ apply the data directory override from the command line
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    log::debug!("data directory: {}", cfg.data_dir().display());

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
