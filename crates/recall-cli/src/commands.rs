//! Command dispatch: wire settings, logging, and the core pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use recall_retrieval::{RecencyWindow, SessionRetriever};
use recall_transcript::{digest_transcript, KeyPointClassifier};
use recall_types::Settings;

use crate::cli::{Cli, Commands};
use crate::report;

/// Entry point behind `main`.
///
/// Extraction propagates transcript errors (nonzero exit); retrieval never
/// fails, empty results are a valid outcome.
pub fn run(cli: Cli) -> Result<()> {
    let (mut settings, settings_err) = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    if let Some(level) = cli.log_level.as_deref() {
        settings.log_level = level.to_string();
    }

    init_logging(&settings.log_level)?;
    if let Some(e) = settings_err {
        warn!(error = %e, "failed to load configuration, using defaults");
    }

    match cli.command {
        Commands::ExtractKeyPoints { transcript_path } => extract_key_points(&transcript_path),
        Commands::FindRelatedSessions {
            topic,
            days,
            archive_dir,
        } => {
            if let Some(dir) = archive_dir.as_deref() {
                settings.set_archive_dir(dir);
            }
            find_related_sessions(&settings, &topic, days);
            Ok(())
        }
    }
}

fn extract_key_points(transcript_path: &str) -> Result<()> {
    let digest = digest_transcript(Path::new(transcript_path), KeyPointClassifier::new())?;
    println!("{}", report::render_digest(&digest));
    Ok(())
}

fn find_related_sessions(settings: &Settings, topic: &str, days: Option<i64>) {
    let retriever = SessionRetriever::new(settings);
    let results = retriever.retrieve(topic, RecencyWindow::from_days(days));
    println!("{}", report::render_sessions(&results, topic, days));
}

/// Initialize tracing once, writing to stderr so reports own stdout.
fn init_logging(level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;
    Ok(())
}
