use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tlog_cli::commands::{set, show, start, start_existing, start_fixed, stop};
use tlog_cli::{Cli, Config};
use tlog_core::{Command, CommandError, Ledger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    // Resolve the command name before any state is touched.
    let command: Command = cli.command.parse()?;

    let config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let store = tlog_store::Store::open(&config.data_dir)
        .with_context(|| format!("failed to open store in {}", config.data_dir.display()))?;
    let entries = store.load().context("failed to load time entries")?;
    let mut ledger = Ledger::from_entries(entries.unwrap_or_default());

    let now = Local::now();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Start => start::run(&mut ledger, cli.label.as_deref(), now),
        Command::StartFixed => start_fixed::run(
            &mut ledger,
            cli.label.as_deref(),
            cli.duration.as_deref(),
            now,
        )?,
        Command::StartExisting => start_existing::run(&mut ledger, cli.label.as_deref(), now)?,
        Command::Set => set::run(&mut out, &mut ledger, cli.label.as_deref())?,
        Command::Show => show::run(&mut out, &ledger, now)?,
        Command::Stop => stop::run(&mut ledger, now),
        Command::Remove => {
            return Err(CommandError::Unimplemented {
                name: cli.command.clone(),
            }
            .into());
        }
    }

    // The save step only runs after the command fully succeeded.
    store
        .save(ledger.entries())
        .context("failed to save time entries")?;

    Ok(())
}
