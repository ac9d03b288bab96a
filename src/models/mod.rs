//! Core data models for the expense tracker

pub mod expense;
pub mod theme;

pub use expense::ExpenseEntry;
pub use theme::Theme;
