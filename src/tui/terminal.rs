//! Terminal setup and teardown
//!
//! Initializes and restores the terminal, including a panic hook that puts
//! the terminal back before the panic message prints.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use tracing::info;

use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::storage::LocalStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// The expense list starts empty and is dropped when the loop exits.
pub fn run_tui(settings: &Settings, paths: &ExpensePaths) -> Result<()> {
    let preferences = LocalStore::open(paths.local_store_file());
    let mut app = App::new(settings, paths, preferences);
    info!(theme = %app.theme, "starting editor");

    let mut terminal = init_terminal()?;
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms.max(10)));

    let result = event_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    info!(entries = app.store.len(), "editor closed");

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
