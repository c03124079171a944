//! `set`: relabel the most recent entry.

use std::io::Write;

use anyhow::Result;

use tlog_core::Ledger;

pub fn run<W: Write>(writer: &mut W, ledger: &mut Ledger, label: Option<&str>) -> Result<()> {
    let changed = ledger.relabel_last(label)?;
    if !changed {
        writeln!(
            writer,
            "WARNING: \"set\" command had no effect, please specify parameters."
        )?;
    }
    Ok(())
}
