//! Time log CLI library.
//!
//! This crate provides the CLI interface for the time log.

mod cli;
pub mod commands;
mod config;

pub use cli::Cli;
pub use config::Config;
