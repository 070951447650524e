//! session-recall
//!
//! Digest and retrieve archived agent session transcripts.
//!
//! # Usage
//!
//! ```bash
//! session-recall extract-key-points <transcript_path>
//! session-recall find-related-sessions <topic> [--days N]
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/session-recall/config.toml)
//! 3. Environment variables (RECALL_*)
//! 4. CLI flags

use std::process::ExitCode;

use clap::Parser;

use recall_cli::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}
