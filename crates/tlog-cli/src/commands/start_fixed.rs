//! `start_fixed`: record an entry with a fixed duration, already closed.

use anyhow::Result;
use chrono::{DateTime, Local};

use tlog_core::{Command, Ledger, parse_minutes};

pub fn run(
    ledger: &mut Ledger,
    label: Option<&str>,
    duration: Option<&str>,
    now: DateTime<Local>,
) -> Result<()> {
    let raw = Command::StartFixed.require_duration(duration)?;
    let minutes = parse_minutes(raw)?;
    ledger.start_fixed_duration(label, minutes, now);
    tracing::debug!(minutes, "recorded fixed-duration entry");
    Ok(())
}
