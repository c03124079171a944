//! `start_existing`: resume a previous activity by fuzzy label match.

use anyhow::Result;
use chrono::{DateTime, Local};

use tlog_core::{Command, Ledger};

pub fn run(ledger: &mut Ledger, label: Option<&str>, now: DateTime<Local>) -> Result<()> {
    let query = Command::StartExisting.require_label(label)?;
    let matched = ledger.resume_by_fuzzy_label(query)?;
    tracing::debug!(query, matched = %matched, "resumed existing label");

    ledger.close_last(now);
    ledger.append(Some(&matched), now);
    Ok(())
}
