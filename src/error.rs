//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Delete requested for a position that does not exist
    #[error("Expense index {index} out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Malformed batch script line
    #[error("Batch error on line {line}: {message}")]
    Batch { line: usize, message: String },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Create a batch script error for a 1-based line number
    pub fn batch(line: usize, message: impl Into<String>) -> Self {
        Self::Batch {
            line,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
