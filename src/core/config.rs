use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values plus overrides).
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Open `path` in the requested editor, falling back to $EDITOR,
    /// $VISUAL or the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());
        let mut out = io::stdout();

        if run_editor(&editor_to_use, path) {
            success(&mut out, format!("Configuration file edited using '{editor_to_use}'"))?;
            return Ok(());
        }

        warning(
            &mut out,
            format!("Editor '{editor_to_use}' not available, falling back to '{default_editor}'"),
        )?;
        if run_editor(&default_editor, path) {
            success(&mut out, format!("Configuration file edited using '{default_editor}'"))?;
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "failed to edit {} with '{default_editor}'",
                path.display()
            )))
        }
    }

    /// Write `cfg` to `path` and create its data directory.
    ///
    /// An existing file is kept unless `force` is set.
    pub fn init(path: &Path, cfg: &Config, force: bool) -> AppResult<()> {
        let mut out = io::stdout();

        if path.exists() && !force {
            warning(
                &mut out,
                format!(
                    "Config file {} already exists (use --force to overwrite)",
                    path.display()
                ),
            )?;
        } else {
            cfg.save_to(path)?;
            success(&mut out, format!("Config file: {}", path.display()))?;
        }

        let data_dir = cfg.data_dir();
        fs::create_dir_all(&data_dir)?;
        success(&mut out, format!("Data directory: {}", data_dir.display()))?;
        Ok(())
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
