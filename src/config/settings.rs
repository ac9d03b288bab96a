//! User settings for the expense tracker
//!
//! Manages editor behaviour preferences. The dark-mode flag is not kept here;
//! it lives in the local store (see [`crate::services::ThemeService`]).

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Ask before deleting a row in the TUI
    #[serde(default)]
    pub confirm_delete: bool,

    /// TUI event loop tick in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            confirm_delete: false,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        read_json(paths.settings_file()).map_err(|e| {
            ExpenseError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert!(!settings.confirm_delete);
        assert_eq!(settings.tick_rate_ms, 250);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            confirm_delete: true,
            tick_rate_ms: 100,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"confirm_delete": true}"#).unwrap();
        assert!(settings.confirm_delete);
        assert_eq!(settings.tick_rate_ms, 250);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
