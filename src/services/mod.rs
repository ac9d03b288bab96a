//! Business logic layer
//!
//! - `expense_list`: the in-memory expense list and its update path
//! - `theme`: the persisted dark-mode preference

pub mod expense_list;
pub mod theme;

pub use expense_list::{ActionOutcome, ExpenseAction, ExpenseListStore};
pub use theme::{read_theme, ThemeService, DARK_MODE_KEY};
