//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/expense-tracker` on Linux)

use std::fs::{File, OpenOptions};
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the config directory
pub const DIR_ENV_VAR: &str = "EXPENSE_TRACKER_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for settings, preferences and logs
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined
    /// and no override is set.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the key/value preference store
    pub fn local_store_file(&self) -> PathBuf {
        self.base_dir.join("local_storage.json")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("expense.log")
    }

    /// Open the TUI log file for a new session, discarding the previous one
    pub fn open_log_file(&self) -> Result<File, ExpenseError> {
        self.ensure_directories()?;
        let path = self.log_file();
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e)))
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    ProjectDirs::from("", "", "expense-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ExpenseError::Config("Could not determine config directory".into()))
}
