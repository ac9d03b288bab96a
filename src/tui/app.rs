//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Expense changes are routed through [`ExpenseListStore::dispatch`]; the
//! text input widget mirrors the store's pending value.

use std::time::Duration;

use tracing::warn;

use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::models::Theme;
use crate::services::{read_theme, ActionOutcome, ExpenseAction, ExpenseListStore, ThemeService};
use crate::storage::LocalStore;

use super::palette::Palette;
use super::widgets::{Notification, NotificationQueue, TextInput};

/// Errors stay on screen longer than the default toast
const ERROR_TOAST_TTL: Duration = Duration::from_secs(6);

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Waiting for confirmation to delete the entry at this index
    ConfirmDelete(usize),
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a ExpensePaths,

    /// Persisted preferences (theme)
    pub preferences: LocalStore,

    /// Active colour theme
    pub theme: Theme,

    /// The expense list being edited
    pub store: ExpenseListStore,

    /// Input field bound to the store's pending text
    pub input: TextInput,

    /// Which panel is focused
    pub focus: Focus,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the list
    pub selected_index: usize,

    /// Toasts
    pub notifications: NotificationQueue,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create a new App instance with an empty expense list
    pub fn new(settings: &'a Settings, paths: &'a ExpensePaths, preferences: LocalStore) -> Self {
        let theme = read_theme(&preferences);
        Self {
            settings,
            paths,
            preferences,
            theme,
            store: ExpenseListStore::new(),
            input: TextInput::new().placeholder("Enter expense"),
            focus: Focus::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            notifications: NotificationQueue::new(),
            should_quit: false,
        }
    }

    /// Palette for the active theme
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue a toast
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
        self.clamp_selection();
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Push the input widget's text into the store
    pub fn sync_pending(&mut self) {
        self.store
            .dispatch(ExpenseAction::SetPending(self.input.value().to_string()));
    }

    /// Commit the pending text as a new expense
    pub fn submit_input(&mut self) {
        match self.store.dispatch(ExpenseAction::Add) {
            ActionOutcome::Added { index } => {
                self.input.clear();
                self.selected_index = index;
                self.notify(Notification::success("Expense added"));
            }
            ActionOutcome::IgnoredBlank => {
                self.notify(Notification::warning("Type an expense first"));
            }
            _ => {}
        }
    }

    /// Delete the selected row, asking first if configured to
    pub fn request_delete(&mut self) {
        if self.store.is_empty() {
            self.notify(Notification::info("Nothing to delete"));
            return;
        }

        if self.settings.confirm_delete {
            self.open_dialog(ActiveDialog::ConfirmDelete(self.selected_index));
        } else {
            self.delete_at(self.selected_index);
        }
    }

    /// Delete the entry at `index`
    pub fn delete_at(&mut self, index: usize) {
        match self.store.dispatch(ExpenseAction::Delete(index)) {
            ActionOutcome::Deleted { entry, .. } => {
                self.clamp_selection();
                self.notify(Notification::success(format!("Deleted '{}'", entry)));
            }
            ActionOutcome::IndexOutOfRange { .. } => {
                self.notify(Notification::warning("That expense no longer exists"));
            }
            _ => {}
        }
    }

    /// Flip between light and dark and persist the choice
    pub fn toggle_theme(&mut self) {
        let result = ThemeService::new(&mut self.preferences).toggle();
        match result {
            Ok(theme) => {
                self.theme = theme;
                self.notify(Notification::info(format!("Theme: {}", theme)));
            }
            Err(e) => {
                warn!(error = %e, "failed to save theme preference");
                self.theme = self.theme.toggled();
                self.notify(
                    Notification::error(format!("Theme not saved: {}", e))
                        .with_ttl(ERROR_TOAST_TTL),
                );
            }
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.store.len().saturating_sub(1);
    }

    /// Keep the selection within the list
    pub fn clamp_selection(&mut self) {
        let max = self.store.len().saturating_sub(1);
        if self.selected_index > max {
            self.selected_index = max;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(crate) struct Fixture {
        pub dir: TempDir,
        pub paths: ExpensePaths,
        pub settings: Settings,
    }

    impl Fixture {
        pub fn new(settings: Settings) -> Self {
            let dir = TempDir::new().unwrap();
            let paths = ExpensePaths::with_base_dir(dir.path().to_path_buf());
            Self {
                dir,
                paths,
                settings,
            }
        }

        pub fn app(&self) -> App<'_> {
            let prefs = LocalStore::open(self.paths.local_store_file());
            App::new(&self.settings, &self.paths, prefs)
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.input.insert(c);
        }
        app.sync_pending();
    }

    #[test]
    fn test_submit_adds_and_clears_input() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();

        type_text(&mut app, "Coffee");
        assert_eq!(app.store.pending(), "Coffee");

        app.submit_input();
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.input.value(), "");
        assert_eq!(app.store.pending(), "");
    }

    #[test]
    fn test_blank_submit_keeps_input() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();

        type_text(&mut app, "   ");
        app.submit_input();

        assert!(app.store.is_empty());
        assert_eq!(app.input.value(), "   ");
        assert_eq!(app.notifications.current().unwrap().message, "Type an expense first");
    }

    #[test]
    fn test_delete_clamps_selection() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();
        app.store = ExpenseListStore::with_entries(["Coffee", "Lunch", "Taxi"]);
        app.focus_list();
        app.select_last();

        app.request_delete();
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_confirm_delete_opens_dialog() {
        let fx = Fixture::new(Settings {
            confirm_delete: true,
            ..Settings::default()
        });
        let mut app = fx.app();
        app.store = ExpenseListStore::with_entries(["Coffee", "Lunch"]);
        app.selected_index = 1;

        app.request_delete();
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmDelete(1));
        assert_eq!(app.store.len(), 2);
    }

    #[test]
    fn test_delete_on_empty_list() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();

        app.request_delete();
        assert!(app.store.is_empty());
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_toggle_theme_persists() {
        let fx = Fixture::new(Settings::default());
        {
            let mut app = fx.app();
            assert_eq!(app.theme, Theme::Light);
            app.toggle_theme();
            assert_eq!(app.theme, Theme::Dark);
        }

        let app = fx.app();
        assert_eq!(app.theme, Theme::Dark);
        assert!(fx.dir.path().join("local_storage.json").exists());
    }

    #[test]
    fn test_unsaved_theme_still_switches_and_reports_error() {
        let fx = Fixture::new(Settings::default());
        std::fs::create_dir_all(fx.paths.local_store_file()).unwrap();
        let mut app = fx.app();

        app.toggle_theme();
        assert_eq!(app.theme, Theme::Dark);
        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.kind, crate::tui::widgets::NotificationKind::Error);
        assert!(toast.message.starts_with("Theme not saved"));
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_selection_bounds() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();
        app.store = ExpenseListStore::with_entries(["a", "b"]);

        app.move_down();
        app.move_down();
        assert_eq!(app.selected_index, 1);
        app.move_up();
        app.move_up();
        assert_eq!(app.selected_index, 0);
    }
}
