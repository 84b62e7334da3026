use crate::errors::{AppError, AppResult};
use crate::models::City;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_show_timing")]
    pub show_timing: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
    /// Per-city CSV file name overrides, keyed by city key ("new york city").
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_page_size() -> usize {
    5
}
fn default_show_timing() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_separator_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            page_size: default_page_size(),
            show_timing: default_show_timing(),
            separator_char: default_separator_char(),
            separator_width: default_separator_width(),
            files: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.bikeshare)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bikeshare")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        if let Some(key) = self.files.keys().find(|k| City::from_input(k).is_none()) {
            return Err(AppError::Config(format!("unknown city in files: '{key}'")));
        }
        Ok(())
    }

    /// Write this configuration as YAML to `path`, creating parent dirs.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// CSV path for `city`, honoring any `files` override.
    pub fn dataset_path(&self, city: City) -> PathBuf {
        let file = self
            .files
            .iter()
            .find(|(k, _)| City::from_input(k) == Some(city))
            .map(|(_, f)| f.as_str())
            .unwrap_or(city.default_file());
        self.data_dir().join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("page_size: 10\n").unwrap();
        assert_eq!(cfg.page_size, 10);
        assert_eq!(cfg.data_dir, ".");
        assert!(cfg.show_timing);
        assert_eq!(cfg.separator_width, 40);
    }

    #[test]
    fn dataset_path_uses_override() {
        let mut cfg = Config {
            data_dir: "/data".into(),
            ..Config::default()
        };
        assert_eq!(
            cfg.dataset_path(City::NewYorkCity),
            PathBuf::from("/data/new_york_city.csv")
        );

        cfg.files.insert("New York City".into(), "nyc_2017.csv".into());
        assert_eq!(
            cfg.dataset_path(City::NewYorkCity),
            PathBuf::from("/data/nyc_2017.csv")
        );
        assert_eq!(
            cfg.dataset_path(City::Chicago),
            PathBuf::from("/data/chicago.csv")
        );
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let cfg = Config {
            page_size: 0,
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
    }
}
