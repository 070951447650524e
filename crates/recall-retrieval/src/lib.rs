//! # recall-retrieval
//!
//! Tiered session retrieval for the session-recall system.
//!
//! Given a topic and an optional recency window, rank archived sessions by
//! relevance using an ordered chain of strategies:
//!
//! 1. **Full-text**: the session index's FTS view, ranked by its native
//!    (negative-is-better) score
//! 2. **Substring**: the same index's relational view, case-sensitive
//!    containment, newest first
//! 3. **Filesystem**: a raw scan of archived session directories, used
//!    only when the index itself cannot be reached
//!
//! Every tier exposes the same `(topic, cutoff) -> results | unavailable`
//! contract. Unavailability cascades down the chain; an answer, empty or
//! not, is terminal. Results are never merged across tiers.
//!
//! ## Modules
//!
//! - [`tier`]: the tier contract and test stubs
//! - [`index_tiers`]: the two index-backed tiers
//! - [`filesystem`]: the directory-scan fallback
//! - [`retriever`]: the orchestrator
//! - [`window`]: recency windows and defensive timestamp parsing

pub mod filesystem;
pub mod index_tiers;
pub mod retriever;
pub mod tier;
pub mod window;

pub use filesystem::FilesystemTier;
pub use index_tiers::{FullTextTier, SubstringTier};
pub use retriever::{SessionRetriever, FETCH_LIMIT};
pub use tier::{RetrievalTier, StubTier, TierOutcome};
pub use window::{parse_archived_at, RecencyWindow};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use recall_index::apply_schema;
    use rusqlite::{params, Connection};
    use std::fs;
    use std::path::Path;

    fn build_index(db_path: &Path, rows: &[(&str, &str, &str)]) {
        let conn = Connection::open(db_path).unwrap();
        apply_schema(&conn).unwrap();
        for (name, archived_at, summary) in rows {
            conn.execute(
                "INSERT INTO sessions (archive_name, archived_at, summary, user_messages)
                 VALUES (?1, ?2, ?3, 3)",
                params![name, archived_at, summary],
            )
            .unwrap();
        }
    }

    fn standard_chain(archive_dir: &Path) -> SessionRetriever {
        let db_path = archive_dir.join("sessions.db");
        SessionRetriever::with_tiers(vec![
            Box::new(FullTextTier::new(db_path.clone())),
            Box::new(SubstringTier::new(db_path.clone())),
            Box::new(FilesystemTier::new(archive_dir.to_path_buf(), db_path)),
        ])
    }

    #[test]
    fn test_fulltext_tier_serves_when_index_present() {
        let archive = tempfile::tempdir().unwrap();
        build_index(
            &archive.path().join("sessions.db"),
            &[("uploader-work", "2026-08-01T10:00:00Z", "uploader retry refactor")],
        );

        let retriever = standard_chain(archive.path());
        let records = retriever.retrieve("uploader", RecencyWindow::unbounded());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].archive_name, "uploader-work");
        // the native score, not the substring constant
        assert!(records[0].relevance < 0.0);
    }

    #[test]
    fn test_bad_fulltext_syntax_falls_back_to_substring() {
        let archive = tempfile::tempdir().unwrap();
        build_index(
            &archive.path().join("sessions.db"),
            &[("uploader-work", "2026-08-01T10:00:00Z", "notes on \"uploader (wip)")],
        );

        // unbalanced quote breaks FTS5 syntax; substring containment still hits
        let topic = "\"uploader (";
        let retriever = standard_chain(archive.path());
        let records = retriever.retrieve(topic, RecencyWindow::unbounded());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].relevance, 0.5);
    }

    #[test]
    fn test_empty_index_answer_does_not_reach_filesystem() {
        let archive = tempfile::tempdir().unwrap();
        build_index(&archive.path().join("sessions.db"), &[]);

        // a session directory that would match if the filesystem tier ran
        let dir = archive.path().join("uploader-session");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join("metadata.json"),
            r#"{"archived_at":"2026-08-01T10:00:00Z","preview":"uploader service refactor"}"#,
        )
        .unwrap();

        let retriever = standard_chain(archive.path());
        let records = retriever.retrieve("uploader", RecencyWindow::unbounded());
        assert!(records.is_empty());
    }

    #[test]
    fn test_filesystem_tier_serves_when_index_missing() {
        let archive = tempfile::tempdir().unwrap();
        let dir = archive.path().join("uploader-session");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join("metadata.json"),
            r#"{"archived_at":"2026-08-01T10:00:00Z","preview":"uploader service refactor"}"#,
        )
        .unwrap();

        let retriever = standard_chain(archive.path());
        let records = retriever.retrieve("uploader", RecencyWindow::unbounded());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].archive_name, "uploader-session");
        assert_eq!(records[0].relevance, 0.5);
    }

    #[test]
    fn test_days_window_filters_index_results() {
        let archive = tempfile::tempdir().unwrap();
        build_index(
            &archive.path().join("sessions.db"),
            &[
                ("ancient", "2020-01-01T10:00:00Z", "uploader work"),
                ("recent", &chrono::Utc::now().to_rfc3339(), "uploader work"),
            ],
        );

        let retriever = standard_chain(archive.path());
        let records = retriever.retrieve("uploader", RecencyWindow::last_days(30));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].archive_name, "recent");
    }
}
