//! Expense entry model
//!
//! An expense is a free-text label. It has no id of its own; it is addressed
//! by its position in the list that holds it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single expense label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseEntry(String);

impl ExpenseEntry {
    /// Create an entry from text, stored exactly as given
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text
    pub fn label(&self) -> &str {
        &self.0
    }

    /// Whether `text` would be rejected as an entry (empty after trimming)
    pub fn is_blank(text: &str) -> bool {
        text.trim().is_empty()
    }
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseEntry {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for ExpenseEntry {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for ExpenseEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_kept_verbatim() {
        let entry = ExpenseEntry::new("  Lunch  with  Sam ");
        assert_eq!(entry.label(), "  Lunch  with  Sam ");
        assert_eq!(entry.to_string(), "  Lunch  with  Sam ");
    }

    #[test]
    fn test_is_blank() {
        assert!(ExpenseEntry::is_blank(""));
        assert!(ExpenseEntry::is_blank("   "));
        assert!(ExpenseEntry::is_blank("\t\n "));
        assert!(!ExpenseEntry::is_blank(" a "));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let entry = ExpenseEntry::from("Coffee");
        assert_eq!(serde_json::to_string(&entry).unwrap(), "\"Coffee\"");

        let back: ExpenseEntry = serde_json::from_str("\"Taxi\"").unwrap();
        assert_eq!(back.label(), "Taxi");
    }
}
