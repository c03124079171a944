//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Personal time log.
///
/// Records labeled activity intervals and prints a summary of elapsed time
/// per entry.
#[derive(Debug, Parser)]
#[command(name = "tlog", version, about, long_about = None)]
pub struct Cli {
    /// Command to execute. Supported commands: start, set, show, remove,
    /// stop, start_fixed, start_existing, start_ex.
    pub command: String,

    /// Label of the activity being carried out.
    #[arg(short, long)]
    pub label: Option<String>,

    /// Duration in minutes.
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
