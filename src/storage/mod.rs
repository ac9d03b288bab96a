//! Storage layer for the expense tracker
//!
//! Only preferences are persisted; expense entries live in memory for the
//! lifetime of an editor session.

pub mod file_io;
pub mod local_store;

pub use file_io::{read_json, write_json_atomic};
pub use local_store::LocalStore;
