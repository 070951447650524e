//! Schema for the session index database.
//!
//! The archiving side owns the real `sessions.db`; this module exists so
//! tests and fixtures can build a compatible one. The FTS5 table mirrors
//! the `sessions` table via external content, kept in sync by triggers.

use rusqlite::Connection;

use crate::error::IndexError;

/// Create the sessions table, its FTS5 mirror, and the sync triggers.
pub fn apply_schema(conn: &Connection) -> Result<(), IndexError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS sessions (
            id INTEGER PRIMARY KEY,
            archive_name TEXT NOT NULL UNIQUE,
            archived_at TEXT NOT NULL,
            working_directory TEXT NOT NULL DEFAULT '',
            user_messages INTEGER NOT NULL DEFAULT 0,
            summary TEXT,
            preview TEXT
        );

        CREATE VIRTUAL TABLE IF NOT EXISTS sessions_fts USING fts5(
            archive_name, summary, preview,
            content='sessions', content_rowid='id'
        );

        CREATE TRIGGER IF NOT EXISTS sessions_ai AFTER INSERT ON sessions BEGIN
            INSERT INTO sessions_fts(rowid, archive_name, summary, preview)
            VALUES (new.id, new.archive_name, new.summary, new.preview);
        END;

        CREATE TRIGGER IF NOT EXISTS sessions_ad AFTER DELETE ON sessions BEGIN
            INSERT INTO sessions_fts(sessions_fts, rowid, archive_name, summary, preview)
            VALUES ('delete', old.id, old.archive_name, old.summary, old.preview);
        END;

        CREATE TRIGGER IF NOT EXISTS sessions_au AFTER UPDATE ON sessions BEGIN
            INSERT INTO sessions_fts(sessions_fts, rowid, archive_name, summary, preview)
            VALUES ('delete', old.id, old.archive_name, old.summary, old.preview);
            INSERT INTO sessions_fts(rowid, archive_name, summary, preview)
            VALUES (new.id, new.archive_name, new.summary, new.preview);
        END;",
    )?;
    Ok(())
}
