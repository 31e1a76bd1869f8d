//! Error types for spendlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for spendlog
#[derive(Debug, Error)]
pub enum SpendlogError {
    #[error("Log file not found: {0}")]
    LogNotFound(PathBuf),

    #[error("Invalid date on line {line}: {text}")]
    InvalidDate { line: usize, text: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SpendlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SpendlogError::LogNotFound(_) => 2,
            SpendlogError::InvalidDate { .. } => 3,
            SpendlogError::Config(_)
            | SpendlogError::TomlDeserialize(_)
            | SpendlogError::TomlSerialize(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SpendlogError::LogNotFound(path) => {
                format!(
                    "Log file not found: {}\n\n\
                    Suggestions:\n\
                    • Pass the log explicitly: spendlog --log path/to/SavingLog.org summary\n\
                    • Set log_file in spendlog.toml (spendlog init-config writes one)\n\
                    • Set SPENDLOG_FILE environment variable to your log path",
                    path.display()
                )
            }
            SpendlogError::InvalidDate { line, text } => {
                format!(
                    "Invalid date on line {}: '{}'\n\n\
                    Day headings carry dates as [YYYY-MM-DD Day], e.g.\n\
                    ** [2024-01-06 Sat]",
                    line, text
                )
            }
            SpendlogError::Config(msg) => {
                if msg.contains("undated_heading") {
                    format!(
                        "{}\n\n\
                        Valid policies: discard, keep-previous",
                        msg
                    )
                } else if msg.contains("budget") {
                    format!(
                        "{}\n\n\
                        The daily budget must be a finite, non-negative number\n\
                        Example: spendlog --budget 14.28 summary",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SpendlogError
pub type Result<T> = std::result::Result<T, SpendlogError>;
