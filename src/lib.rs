//! Expense Tracker - terminal expense list editor
//!
//! This library provides an in-memory expense list with a staged input
//! value, a persisted light/dark preference, and the CLI and TUI front ends
//! that drive them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense entries and the theme preference
//! - `storage`: JSON file helpers and the key/value local store
//! - `services`: The expense list store and theme service
//! - `display`: Table and JSON rendering of the list
//! - `cli`: Batch and theme subcommands
//! - `tui`: Interactive editor
//!
//! # Example
//!
//! ```rust
//! use expense::services::ExpenseListStore;
//!
//! let mut store = ExpenseListStore::new();
//! store.set_pending("Coffee");
//! assert!(store.add_expense());
//! assert_eq!(store.entries()[0].label(), "Coffee");
//! assert_eq!(store.pending(), "");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
