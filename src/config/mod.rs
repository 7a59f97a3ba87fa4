//! Configuration management for the moodcal application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODCAL_DIR`: Path to the journal directory (defaults to ~/Documents/moodcal)
//! - `MOODCAL_LOG_FORMAT`: `text` (default) or `json`
//! - `HOME`: Used for expanding the default journal directory path

use crate::constants::{
    DEFAULT_JOURNAL_SUBDIR, ENV_VAR_HOME, ENV_VAR_MOODCAL_DIR, ENV_VAR_MOODCAL_LOG_FORMAT,
    LOG_FORMAT_JSON, LOG_FORMAT_TEXT, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the moodcal application.
///
/// # Examples
///
/// ```
/// use moodcal::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     journal_dir: PathBuf::from("/path/to/journal"),
///     log_format: "text".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Directory holding the entry document.
    ///
    /// Loaded from `MOODCAL_DIR` with a fallback to ~/Documents/moodcal.
    pub journal_dir: PathBuf,

    /// Log output format, `text` or `json`.
    pub log_format: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("journal_dir", &REDACTED_PLACEHOLDER)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_dir: PathBuf::from(""),
            log_format: LOG_FORMAT_TEXT.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The journal directory path is expanded with `shellexpand`, so `~` and
    /// `$VAR` references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the journal directory path expansion fails
    /// or yields an empty path. The log format is checked by [`Config::validate`],
    /// after any command-line override has been applied.
    pub fn load() -> AppResult<Self> {
        let journal_dir_str = env::var(ENV_VAR_MOODCAL_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_JOURNAL_SUBDIR)
        });

        let expanded_path = shellexpand::full(&journal_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let journal_dir = PathBuf::from(expanded_path.into_owned());
        if journal_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Journal directory path is empty".to_string(),
            ));
        }

        let log_format =
            env::var(ENV_VAR_MOODCAL_LOG_FORMAT).unwrap_or_else(|_| LOG_FORMAT_TEXT.to_string());

        Ok(Config {
            journal_dir,
            log_format,
        })
    }

    /// Replaces the log format with the `--log-format` value, if one was given.
    pub fn with_log_format(mut self, cli_value: Option<&str>) -> Self {
        if let Some(format) = cli_value {
            self.log_format = format.to_string();
        }
        self
    }

    /// Checks a log format name.
    pub fn validate_log_format(value: &str) -> AppResult<&str> {
        match value {
            LOG_FORMAT_TEXT | LOG_FORMAT_JSON => Ok(value),
            other => Err(AppError::Config(format!(
                "Invalid log format: {} (expected '{}' or '{}')",
                other, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            ))),
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the journal directory is empty or
    /// relative, or the log format is unknown.
    pub fn validate(&self) -> AppResult<()> {
        if self.journal_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Journal directory path is empty".to_string(),
            ));
        }

        if !self.journal_dir.is_absolute() {
            return Err(AppError::Config(
                "Journal directory must be an absolute path".to_string(),
            ));
        }

        Self::validate_log_format(&self.log_format)?;
        Ok(())
    }
}
