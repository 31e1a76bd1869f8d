//! Configuration management

use crate::domain::{UndatedHeadingPolicy, DEFAULT_DAILY_BUDGET};
use crate::error::{Result, SpendlogError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "spendlog.toml";

/// Environment variable overriding the configured log file
pub const LOG_FILE_ENV: &str = "SPENDLOG_FILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_file: PathBuf,
    pub daily_budget: f64,
    pub undated_heading: UndatedHeadingPolicy,
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file: PathBuf::from("SavingLog.org"),
            daily_budget: DEFAULT_DAILY_BUDGET,
            undated_heading: UndatedHeadingPolicy::default(),
            currency: String::new(),
        }
    }
}

impl Config {
    /// Load config from an explicit TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SpendlogError::Config(format!("Config file not found: {}", path.display()))
            } else {
                SpendlogError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            SpendlogError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the explicit file if given, else `spendlog.toml` in `dir` if present,
    /// else defaults
    pub fn discover_in(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            Self::load_from_file(&candidate)
        } else {
            Ok(Config::default())
        }
    }

    /// Write config as pretty TOML, refusing to clobber an existing file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(SpendlogError::Config(format!(
                "Config file already exists: {}",
                path.display()
            )));
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.daily_budget.is_finite() || self.daily_budget < 0.0 {
            return Err(SpendlogError::Config(format!(
                "Invalid daily budget: {}",
                self.daily_budget
            )));
        }
        Ok(())
    }

    /// Log file to read: command-line flag, then environment, then config value
    pub fn resolve_log_file(&self, flag: Option<&Path>, env: Option<String>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| self.log_file.clone())
    }
}
