use crate::core::layouts::ADP_DEFAULT_SHEET;
use crate::errors::{AppError, AppResult};
use crate::utils::date::DEFAULT_DATE_FORMAT;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_folder")]
    pub output_folder: String,
    #[serde(default = "default_true")]
    pub overwrite: bool,
    #[serde(default)]
    pub backup_existing: bool,
    #[serde(default)]
    pub csv_mirror: bool,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_adp_sheet")]
    pub adp_sheet: String,
}

fn default_output_folder() -> String {
    Config::config_dir()
        .join("reports")
        .to_string_lossy()
        .to_string()
}
fn default_true() -> bool {
    true
}
fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_adp_sheet() -> String {
    ADP_DEFAULT_SHEET.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_folder: default_output_folder(),
            overwrite: default_true(),
            backup_existing: false,
            csv_mirror: false,
            date_format: default_date_format(),
            adp_sheet: default_adp_sheet(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("enrollcheck")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".enrollcheck")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("enrollcheck.conf")
    }

    /// Config file to use: the override when given, the standard one otherwise.
    pub fn resolve_path(custom: Option<&Path>) -> PathBuf {
        custom
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found.
    /// A file that exists but does not parse is an error.
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        let path = Self::resolve_path(custom);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.date_format.trim().is_empty() {
            return Err(AppError::Config("date_format must not be empty".into()));
        }
        if self.adp_sheet.trim().is_empty() {
            return Err(AppError::Config("adp_sheet must not be empty".into()));
        }
        Ok(())
    }

    /// Output folder with `~` expanded.
    pub fn output_dir(&self) -> PathBuf {
        expand_tilde(&self.output_folder)
    }

    /// Write this configuration to `path`, creating parent folders.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Write the default configuration file (and the reports folder).
    /// An existing file is left untouched; returns whether it was created.
    pub fn init_all(custom: Option<&Path>) -> AppResult<bool> {
        let path = Self::resolve_path(custom);
        let cfg = Self::default();

        fs::create_dir_all(cfg.output_dir())?;

        if path.exists() {
            return Ok(false);
        }
        cfg.save(&path)?;
        Ok(true)
    }
}
