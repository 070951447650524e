//! Command-line interface for session-recall.

pub mod cli;
pub mod commands;
pub mod report;

pub use cli::{Cli, Commands};
pub use commands::run;
