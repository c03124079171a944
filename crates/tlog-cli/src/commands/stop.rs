//! `stop`: close the running entry.

use chrono::{DateTime, Local};

use tlog_core::Ledger;

pub fn run(ledger: &mut Ledger, now: DateTime<Local>) {
    ledger.close_last(now);
    tracing::debug!("stopped last entry");
}
