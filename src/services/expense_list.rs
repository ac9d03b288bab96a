//! Expense list state
//!
//! [`ExpenseListStore`] owns the ordered list of entries together with the
//! staged input text. Every change goes through [`ExpenseListStore::dispatch`]
//! so that the TUI and batch mode share one update path.
//!
//! The list is never edited in place: each add or delete builds a fresh
//! `Vec` and swaps it in, so a snapshot taken before an update is never
//! affected by it.

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseEntry;

/// A user action against the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseAction {
    /// Replace the staged input text
    SetPending(String),
    /// Commit the staged text as a new entry
    Add,
    /// Remove the entry at a position
    Delete(usize),
}

/// What a dispatched action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Staged text replaced
    PendingSet,
    /// New entry appended at `index`
    Added { index: usize },
    /// Add ignored because the staged text was blank
    IgnoredBlank,
    /// Entry removed from `index`
    Deleted { index: usize, entry: ExpenseEntry },
    /// Delete ignored because `index` was not a valid position
    IndexOutOfRange { index: usize, len: usize },
}

/// In-memory expense list with a staged input value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseListStore {
    entries: Vec<ExpenseEntry>,
    pending: String,
}

impl ExpenseListStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with entries and an empty input
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ExpenseEntry>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            pending: String::new(),
        }
    }

    /// Current entries in insertion order
    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    /// Currently staged input text
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if any
    pub fn get(&self, index: usize) -> Option<&ExpenseEntry> {
        self.entries.get(index)
    }

    /// Apply an action and report what happened
    pub fn dispatch(&mut self, action: ExpenseAction) -> ActionOutcome {
        match action {
            ExpenseAction::SetPending(text) => {
                self.pending = text;
                ActionOutcome::PendingSet
            }
            ExpenseAction::Add => {
                if ExpenseEntry::is_blank(&self.pending) {
                    debug!("ignoring blank expense input");
                    return ActionOutcome::IgnoredBlank;
                }

                let entry = ExpenseEntry::new(std::mem::take(&mut self.pending));
                let index = self.entries.len();
                self.entries = self
                    .entries
                    .iter()
                    .cloned()
                    .chain(std::iter::once(entry))
                    .collect();

                debug!(index, len = self.entries.len(), "expense added");
                ActionOutcome::Added { index }
            }
            ExpenseAction::Delete(index) => {
                let len = self.entries.len();
                let Some(entry) = self.entries.get(index).cloned() else {
                    warn!(index, len, "delete requested for missing expense, ignoring");
                    return ActionOutcome::IndexOutOfRange { index, len };
                };

                self.entries = self
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != index)
                    .map(|(_, e)| e.clone())
                    .collect();

                debug!(index, len = self.entries.len(), "expense deleted");
                ActionOutcome::Deleted { index, entry }
            }
        }
    }

    /// Replace the staged input text
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.dispatch(ExpenseAction::SetPending(text.into()));
    }

    /// Commit the staged text; returns `false` if it was blank
    ///
    /// The untrimmed text is stored. Trimming only decides whether the input
    /// counts as empty.
    pub fn add_expense(&mut self) -> bool {
        matches!(
            self.dispatch(ExpenseAction::Add),
            ActionOutcome::Added { .. }
        )
    }

    /// Remove the entry at `index`
    ///
    /// An out-of-range index leaves the list untouched and returns `None`.
    pub fn delete_expense(&mut self, index: usize) -> Option<ExpenseEntry> {
        match self.dispatch(ExpenseAction::Delete(index)) {
            ActionOutcome::Deleted { entry, .. } => Some(entry),
            _ => None,
        }
    }

    /// Remove the entry at `index`, failing on an out-of-range index
    pub fn try_delete_expense(&mut self, index: usize) -> ExpenseResult<ExpenseEntry> {
        match self.dispatch(ExpenseAction::Delete(index)) {
            ActionOutcome::Deleted { entry, .. } => Ok(entry),
            ActionOutcome::IndexOutOfRange { index, len } => {
                Err(ExpenseError::IndexOutOfRange { index, len })
            }
            other => Err(ExpenseError::Validation(format!(
                "Unexpected outcome for delete: {:?}",
                other
            ))),
        }
    }
}
