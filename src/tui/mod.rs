//! Terminal User Interface module
//!
//! An interactive editor for the expense list built on ratatui: a text
//! input, an "add" action, and a list with per-row delete.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod palette;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

pub use app::App;
pub use terminal::run_tui;
