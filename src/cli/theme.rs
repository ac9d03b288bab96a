//! Theme CLI commands
//!
//! Reads and changes the persisted dark-mode preference.

use clap::Subcommand;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::models::Theme;
use crate::services::ThemeService;
use crate::storage::LocalStore;

/// Theme subcommands
#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,
    /// Switch to the dark theme
    Dark,
    /// Switch to the light theme
    Light,
    /// Flip between light and dark
    Toggle,
}

/// Handle a theme command
pub fn handle_theme_command(paths: &ExpensePaths, cmd: ThemeCommands) -> ExpenseResult<()> {
    let mut store = LocalStore::open(paths.local_store_file());
    let mut service = ThemeService::new(&mut store);

    let theme = match cmd {
        ThemeCommands::Show => {
            println!("Theme: {}", service.load());
            return Ok(());
        }
        ThemeCommands::Dark => service.set(Theme::Dark)?,
        ThemeCommands::Light => service.set(Theme::Light)?,
        ThemeCommands::Toggle => service.toggle()?,
    };

    println!("Theme set to {}", theme);
    Ok(())
}
