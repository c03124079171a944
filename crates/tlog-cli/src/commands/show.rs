//! `show`: print the elapsed-time summary, one line per entry.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Local};

use tlog_core::Ledger;

pub fn run<W: Write>(writer: &mut W, ledger: &Ledger, now: DateTime<Local>) -> Result<()> {
    for line in ledger.render_summary(now) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
