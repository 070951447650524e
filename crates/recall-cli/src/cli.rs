//! CLI argument parsing for session-recall.

use clap::{Parser, Subcommand};

/// Digest and retrieve archived agent session transcripts.
#[derive(Parser, Debug)]
#[command(name = "session-recall")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides ~/.config/session-recall/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract key points from a session transcript
    ExtractKeyPoints {
        /// Path to the transcript JSONL file
        transcript_path: String,
    },

    /// Find archived sessions related to a topic
    FindRelatedSessions {
        /// Topic to search for
        topic: String,

        /// Only consider sessions from the last N days
        #[arg(short, long)]
        days: Option<i64>,

        /// Override the archive directory (the index moves with it)
        #[arg(long)]
        archive_dir: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_extract_key_points() {
        let cli = Cli::parse_from(["session-recall", "extract-key-points", "/tmp/t.jsonl"]);
        match cli.command {
            Commands::ExtractKeyPoints { transcript_path } => {
                assert_eq!(transcript_path, "/tmp/t.jsonl");
            }
            _ => panic!("Expected ExtractKeyPoints command"),
        }
    }

    #[test]
    fn test_cli_find_related_sessions() {
        let cli = Cli::parse_from(["session-recall", "find-related-sessions", "uploader"]);
        match cli.command {
            Commands::FindRelatedSessions { topic, days, .. } => {
                assert_eq!(topic, "uploader");
                assert_eq!(days, None);
            }
            _ => panic!("Expected FindRelatedSessions command"),
        }
    }

    #[test]
    fn test_cli_find_with_days() {
        let cli = Cli::parse_from([
            "session-recall",
            "find-related-sessions",
            "uploader",
            "--days",
            "30",
        ]);
        match cli.command {
            Commands::FindRelatedSessions { days, .. } => assert_eq!(days, Some(30)),
            _ => panic!("Expected FindRelatedSessions command"),
        }
    }

    #[test]
    fn test_cli_find_with_short_days() {
        let cli = Cli::parse_from(["session-recall", "find-related-sessions", "uploader", "-d", "7"]);
        match cli.command {
            Commands::FindRelatedSessions { days, .. } => assert_eq!(days, Some(7)),
            _ => panic!("Expected FindRelatedSessions command"),
        }
    }

    #[test]
    fn test_cli_find_with_archive_dir() {
        let cli = Cli::parse_from([
            "session-recall",
            "find-related-sessions",
            "uploader",
            "--archive-dir",
            "/tmp/archives",
        ]);
        match cli.command {
            Commands::FindRelatedSessions { archive_dir, .. } => {
                assert_eq!(archive_dir, Some("/tmp/archives".to_string()));
            }
            _ => panic!("Expected FindRelatedSessions command"),
        }
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from([
            "session-recall",
            "--config",
            "/path/to/config.toml",
            "extract-key-points",
            "/tmp/t.jsonl",
        ]);
        assert_eq!(cli.config, Some("/path/to/config.toml".to_string()));
    }

    #[test]
    fn test_cli_with_log_level() {
        let cli = Cli::parse_from([
            "session-recall",
            "--log-level",
            "debug",
            "find-related-sessions",
            "uploader",
        ]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }
}
