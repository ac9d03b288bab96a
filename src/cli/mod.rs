//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod batch;
pub mod theme;

pub use batch::{handle_batch_command, BatchArgs, OutputFormat};
pub use theme::{handle_theme_command, ThemeCommands};
