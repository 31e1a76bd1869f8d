//! Write default configuration use case

use crate::error::Result;
use crate::infrastructure::config::{Config, CONFIG_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};

/// Write a default `spendlog.toml` into `dir`, returning the file written.
pub fn init_config(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(CONFIG_FILE_NAME);
    Config::default().save_to_file(&path)?;
    Ok(path)
}
