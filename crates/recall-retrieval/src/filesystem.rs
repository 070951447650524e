//! Filesystem fallback: scan archived session directories directly.
//!
//! Last-resort tier for when the session index is unreachable. Each
//! archived session is a directory holding a `metadata.json`; directories
//! without one, or with metadata that fails to parse, are skipped without
//! error.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;
use walkdir::WalkDir;

use recall_types::text::truncate_chars;
use recall_types::SessionRecord;

use crate::retriever::FETCH_LIMIT;
use crate::tier::{RetrievalTier, TierOutcome};
use crate::window::parse_archived_at;

/// Relevance assigned to filesystem matches; no scoring source exists here.
const FILESYSTEM_RELEVANCE: f64 = 0.5;

/// Context preview length for filesystem matches.
const CONTEXT_MAX_CHARS: usize = 100;

/// Per-session metadata document, parsed permissively: any field may be
/// absent without failing the entry.
#[derive(Debug, Default, Deserialize)]
struct SessionMetadata {
    #[serde(default)]
    archived_at: Option<String>,
    #[serde(default)]
    preview: Option<String>,
    #[serde(default)]
    working_directory: Option<String>,
    #[serde(default)]
    stats: MetadataStats,
}

#[derive(Debug, Default, Deserialize)]
struct MetadataStats {
    #[serde(default)]
    user_messages: i64,
}

/// Filesystem tier: reads per-session metadata straight off disk.
///
/// Only steps in when the index database is unreachable; while the index
/// exists this tier reports itself unavailable so every result set comes
/// from a single source.
pub struct FilesystemTier {
    archive_dir: PathBuf,
    db_path: PathBuf,
}

impl FilesystemTier {
    pub fn new(archive_dir: impl Into<PathBuf>, db_path: impl Into<PathBuf>) -> Self {
        Self {
            archive_dir: archive_dir.into(),
            db_path: db_path.into(),
        }
    }

    fn scan(&self, topic: &str, cutoff: Option<DateTime<Utc>>) -> Vec<SessionRecord> {
        let needle = topic.to_lowercase();
        let mut records = Vec::new();

        for entry in WalkDir::new(&self.archive_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_dir() {
                continue;
            }
            if let Some(record) = read_session_dir(entry.path(), &needle, cutoff) {
                records.push(record);
            }
        }

        // Newest first; "unknown" timestamps sort ahead, as strings do
        records.sort_by(|a, b| b.archived_at.cmp(&a.archived_at));
        records.truncate(FETCH_LIMIT);
        records
    }
}

impl RetrievalTier for FilesystemTier {
    fn name(&self) -> &'static str {
        "filesystem"
    }

    fn search(&self, topic: &str, cutoff: Option<DateTime<Utc>>) -> TierOutcome {
        if self.db_path.exists() {
            return TierOutcome::Unavailable {
                reason: "session index is reachable".to_string(),
            };
        }
        if !self.archive_dir.is_dir() {
            debug!(dir = %self.archive_dir.display(), "archive directory missing");
            return TierOutcome::Results(Vec::new());
        }
        TierOutcome::Results(self.scan(topic, cutoff))
    }
}

/// One session directory, at most one record. Missing or malformed
/// metadata, a failed date filter, or a topic miss all yield `None`.
fn read_session_dir(
    dir: &Path,
    needle: &str,
    cutoff: Option<DateTime<Utc>>,
) -> Option<SessionRecord> {
    let metadata_path = dir.join("metadata.json");
    let raw = fs::read_to_string(&metadata_path).ok()?;
    let metadata: SessionMetadata = match serde_json::from_str(&raw) {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!(path = %metadata_path.display(), error = %e, "skipping malformed metadata");
            return None;
        }
    };

    let archived_at = metadata.archived_at.unwrap_or_default();
    if let Some(cutoff) = cutoff {
        // An unparseable timestamp disables the filter for this entry
        if let Some(parsed) = parse_archived_at(&archived_at) {
            if parsed < cutoff {
                return None;
            }
        }
    }

    let name = dir.file_name()?.to_string_lossy().to_string();
    let preview = metadata.preview.unwrap_or_default();
    let working_directory = metadata.working_directory.unwrap_or_default();

    let haystack = format!("{name} {preview} {working_directory}").to_lowercase();
    if !haystack.contains(needle) {
        return None;
    }

    Some(SessionRecord {
        archive_name: name,
        archived_at: if archived_at.is_empty() {
            "unknown".to_string()
        } else {
            archived_at
        },
        working_directory,
        user_messages: metadata.stats.user_messages,
        context: truncate_chars(&preview, CONTEXT_MAX_CHARS),
        relevance: FILESYSTEM_RELEVANCE,
    })
}
