use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (kept if it already exists, unless --force)
///  - the data directory the city CSV files are read from
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        println!("⚙️  Initializing bikeshare…");
        ConfigLogic::init(config_path, cfg, *force)?;
        println!(
            "🎉 Place chicago.csv, new_york_city.csv and washington.csv in the data directory."
        );
    }
    Ok(())
}
