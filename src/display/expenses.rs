//! Expense list display formatting
//!
//! Formats the expense list for terminal output as a table or as JSON.

use tabled::{settings::Style, Table, Tabled};

use crate::error::ExpenseResult;
use crate::models::ExpenseEntry;

/// One table row: position and label
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Expense")]
    label: String,
}

/// Format the list as a table, one row per entry with its index
pub fn format_expense_table(entries: &[ExpenseEntry]) -> String {
    if entries.is_empty() {
        return "No expenses.".to_string();
    }

    let rows = entries.iter().enumerate().map(|(index, entry)| ExpenseRow {
        index,
        label: entry.label().to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{}\n\nTotal: {} expense(s)", table, entries.len())
}

/// Format the list as a JSON array of strings
pub fn format_expense_json(entries: &[ExpenseEntry]) -> ExpenseResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
