//! `start`: close the running entry and begin a new one.

use chrono::{DateTime, Local};

use tlog_core::Ledger;

pub fn run(ledger: &mut Ledger, label: Option<&str>, now: DateTime<Local>) {
    ledger.close_last(now);
    let entry = ledger.append(label, now);
    tracing::debug!(label = %entry.label, "started new entry");
}
