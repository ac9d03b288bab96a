//! Display formatting for terminal output
//!
//! Provides utilities for formatting the expense list for batch output.

pub mod expenses;

pub use expenses::{format_expense_json, format_expense_table};
