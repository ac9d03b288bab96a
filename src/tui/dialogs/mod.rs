//! Modal dialogs

pub mod confirm;
pub mod help;
