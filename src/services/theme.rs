//! Theme preference service
//!
//! The dark-mode flag is kept in the [`LocalStore`] under [`DARK_MODE_KEY`]
//! as a JSON-encoded boolean (`"true"` / `"false"`).

use tracing::warn;

use crate::error::ExpenseResult;
use crate::models::Theme;
use crate::storage::LocalStore;

/// Local store key holding the dark-mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Service for reading and persisting the theme preference
pub struct ThemeService<'a> {
    store: &'a mut LocalStore,
}

impl<'a> ThemeService<'a> {
    /// Create a new theme service
    pub fn new(store: &'a mut LocalStore) -> Self {
        Self { store }
    }

    /// Read the stored theme, defaulting to light
    pub fn load(&self) -> Theme {
        read_theme(self.store)
    }

    /// Persist `theme`
    pub fn set(&mut self, theme: Theme) -> ExpenseResult<Theme> {
        let encoded = serde_json::to_string(&theme.is_dark())?;
        self.store.set_item(DARK_MODE_KEY, encoded);
        self.store.save()?;
        Ok(theme)
    }

    /// Flip the stored theme and persist it
    pub fn toggle(&mut self) -> ExpenseResult<Theme> {
        let next = self.load().toggled();
        self.set(next)
    }
}

/// Read the theme from a store without borrowing it mutably
pub fn read_theme(store: &LocalStore) -> Theme {
    let Some(raw) = store.get_item(DARK_MODE_KEY) else {
        return Theme::default();
    };

    match serde_json::from_str::<bool>(raw) {
        Ok(dark) => Theme::from_dark_mode(dark),
        Err(e) => {
            warn!(value = raw, error = %e, "ignoring unreadable dark mode preference");
            Theme::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> LocalStore {
        LocalStore::open(dir.path().join("local_storage.json"))
    }

    #[test]
    fn test_default_is_light() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = open_store(&temp_dir);
        assert_eq!(ThemeService::new(&mut store).load(), Theme::Light);
    }

    #[test]
    fn test_set_writes_json_bool() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = open_store(&temp_dir);

        ThemeService::new(&mut store).set(Theme::Dark).unwrap();
        assert_eq!(store.get_item(DARK_MODE_KEY), Some("true"));

        ThemeService::new(&mut store).set(Theme::Light).unwrap();
        assert_eq!(store.get_item(DARK_MODE_KEY), Some("false"));
    }

    #[test]
    fn test_toggle_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut store = open_store(&temp_dir);
            let theme = ThemeService::new(&mut store).toggle().unwrap();
            assert_eq!(theme, Theme::Dark);
        }

        let store = open_store(&temp_dir);
        assert_eq!(read_theme(&store), Theme::Dark);
    }

    #[test]
    fn test_hand_written_bool_reads_as_dark() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("local_storage.json"),
            r#"{"darkMode": true}"#,
        )
        .unwrap();

        let mut store = open_store(&temp_dir);
        assert_eq!(read_theme(&store), Theme::Dark);
        assert_eq!(ThemeService::new(&mut store).toggle().unwrap(), Theme::Light);
    }

    #[test]
    fn test_unreadable_value_falls_back_to_light() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = open_store(&temp_dir);
        store.set_item(DARK_MODE_KEY, "yes please");

        assert_eq!(read_theme(&store), Theme::Light);
    }
}
