//! Core domain logic for the time log.
//!
//! This crate contains the entry lifecycle state machine:
//! - the ordered entry ledger and its mutation rules
//! - fuzzy label resolution for resuming previous activities
//! - duration and summary-line formatting
//! - the supported command set and its parameter requirements

pub mod command;
pub mod entry;
pub mod format;
mod fuzzy;
pub mod ledger;

pub use command::{Command, CommandError, parse_minutes};
pub use entry::TimeEntry;
pub use ledger::{Ledger, LedgerError};
