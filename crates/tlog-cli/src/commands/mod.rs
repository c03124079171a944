//! CLI subcommand implementations.

pub mod set;
pub mod show;
pub mod start;
pub mod start_existing;
pub mod start_fixed;
pub mod stop;
