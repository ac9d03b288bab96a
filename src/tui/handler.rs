//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! focus and dialog state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, Focus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if is_command(&key) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.focus {
        Focus::Input => handle_input_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

/// Control chords, excluding AltGr which terminals on Windows report as
/// CONTROL | ALT
fn is_command(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

/// Plain and shifted keys, plus AltGr; lone Ctrl or Alt chords are not text
fn produces_text(key: &KeyEvent) -> bool {
    let chord = key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT);
    chord.is_empty() || chord == KeyModifiers::CONTROL | KeyModifiers::ALT
}

/// Handle keys while typing in the input box
fn handle_input_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => app.focus_list(),
        KeyCode::Backspace => {
            app.input.backspace();
            app.sync_pending();
        }
        KeyCode::Delete => {
            app.input.delete();
            app.sync_pending();
        }
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char(c) if produces_text(&key) => {
            app.input.insert(c);
            app.sync_pending();
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys while the list has focus
fn handle_list_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('t') => app.toggle_theme(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.request_delete(),

        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab | KeyCode::Enter => {
            app.focus_input()
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog.clone() {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::ConfirmDelete(index) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                app.delete_at(index);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::services::ExpenseListStore;
    use crate::tui::app::tests::Fixture;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::from(code))).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn labels(app: &App) -> Vec<String> {
        app.store
            .entries()
            .iter()
            .map(|e| e.label().to_string())
            .collect()
    }

    #[test]
    fn test_type_and_add() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();

        type_str(&mut app, "Coffee");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Lunch");
        press(&mut app, KeyCode::Enter);

        assert_eq!(labels(&app), vec!["Coffee", "Lunch"]);
        assert_eq!(app.store.pending(), "");
    }

    #[test]
    fn test_q_types_into_input() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();

        type_str(&mut app, "quiche");
        assert!(!app.should_quit);
        assert_eq!(app.store.pending(), "quiche");
    }

    #[test]
    fn test_backspace_updates_pending() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();

        type_str(&mut app, "Taxis");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.store.pending(), "Taxi");
    }

    #[test]
    fn test_delete_from_list() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();
        app.store = ExpenseListStore::with_entries(["Coffee", "Lunch", "Taxi"]);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::List);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(labels(&app), vec!["Coffee", "Taxi"]);
    }

    #[test]
    fn test_confirm_dialog_flow() {
        let fx = Fixture::new(Settings {
            confirm_delete: true,
            ..Settings::default()
        });
        let mut app = fx.app();
        app.store = ExpenseListStore::with_entries(["Coffee", "Lunch"]);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.len(), 2);
        assert!(!app.has_dialog());

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(labels(&app), vec!["Lunch"]);
    }

    #[test]
    fn test_help_dialog_swallows_keys() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();
        app.store = ExpenseListStore::with_entries(["Coffee"]);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.store.len(), 1);

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_ctrl_c_quits_from_input() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_altgr_characters_are_typed() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();

        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        for c in ['@', '€'] {
            handle_event(&mut app, Event::Key(KeyEvent::new(KeyCode::Char(c), altgr))).unwrap();
        }
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
        )
        .unwrap();

        assert_eq!(app.store.pending(), "@€");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_from_list() {
        let fx = Fixture::new(Settings::default());
        let mut app = fx.app();

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
