//! The ordered entry history and its mutation rules.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Local};
use thiserror::Error;

use crate::entry::TimeEntry;
use crate::format::entry_line;
use crate::fuzzy::{MatchOutcome, close_matches};

/// Errors from ledger operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The most recent entry was addressed but none exist yet.
    #[error("can't use \"set\" command when there are no time entries yet")]
    EmptyLedger,

    /// No known label was close enough to the query.
    #[error("no match for the specified label \"{query}\"")]
    NoMatch { query: String },

    /// Several known labels were close enough to the query.
    #[error("ambiguous label, found matches: {}", candidates.join(", "))]
    AmbiguousMatch {
        query: String,
        candidates: Vec<String>,
    },

    /// The duration parameter was not a whole number of minutes.
    #[error("invalid duration \"{value}\", expected a whole number of minutes")]
    InvalidDuration { value: String },
}

/// The full ordered history of entries for the tracked user.
///
/// Insertion order is chronological order. A ledger is reconstructed from
/// the store at the start of every invocation, handed by exclusive borrow
/// into exactly one command, then serialized back wholesale.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ledger {
    entries: Vec<TimeEntry>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Reconstructs a ledger from previously persisted entries.
    pub const fn from_entries(entries: Vec<TimeEntry>) -> Self {
        Self { entries }
    }

    /// The recorded entries, chronological.
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a new open entry starting at `now` and returns it.
    ///
    /// An absent label becomes the empty string.
    pub fn append(&mut self, label: Option<&str>, now: DateTime<Local>) -> &mut TimeEntry {
        self.entries
            .push(TimeEntry::open(label.unwrap_or_default(), now));
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    /// Closes the last entry at `now` if it is still open.
    ///
    /// No-op on an empty ledger or an already-closed last entry.
    pub fn close_last(&mut self, now: DateTime<Local>) {
        if let Some(last) = self.entries.last_mut() {
            if last.end.is_none() {
                last.end = Some(now);
            }
        }
    }

    /// Overwrites the label of the most recent entry.
    ///
    /// Returns `Ok(false)` without mutating when `label` is absent or
    /// empty; the caller is expected to surface a warning. Fails with
    /// [`LedgerError::EmptyLedger`] when nothing has been recorded yet.
    pub fn relabel_last(&mut self, label: Option<&str>) -> Result<bool, LedgerError> {
        let last = self.entries.last_mut().ok_or(LedgerError::EmptyLedger)?;
        match label {
            Some(label) if !label.is_empty() => {
                last.label = label.to_string();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Resolves `query` against the labels recorded so far.
    ///
    /// The caller is expected to close the current entry and append a new
    /// one with the returned label.
    pub fn resume_by_fuzzy_label(&self, query: &str) -> Result<String, LedgerError> {
        match close_matches(query, &self.known_labels()) {
            MatchOutcome::Unique(label) => Ok(label),
            MatchOutcome::None => Err(LedgerError::NoMatch {
                query: query.to_string(),
            }),
            MatchOutcome::Ambiguous(candidates) => Err(LedgerError::AmbiguousMatch {
                query: query.to_string(),
                candidates,
            }),
        }
    }

    /// Appends an entry that is already closed, spanning `minutes` from `now`.
    ///
    /// The new entry never counts as the open entry. Note this does *not*
    /// close a previously open entry first.
    pub fn start_fixed_duration(
        &mut self,
        label: Option<&str>,
        minutes: i64,
        now: DateTime<Local>,
    ) {
        let entry = self.append(label, now);
        entry.end = Some(entry.start + Duration::minutes(minutes));
    }

    /// One display line per entry, chronological. Read-only.
    pub fn render_summary(&self, now: DateTime<Local>) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry_line(entry, now))
            .collect()
    }

    /// Distinct non-empty labels in first-seen order.
    fn known_labels(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|entry| !entry.label.is_empty())
            .filter(|entry| seen.insert(entry.label.as_str()))
            .map(|entry| entry.label.clone())
            .collect()
    }
}
