//! Read-side access to the session index.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OpenFlags, ToSql};
use tracing::debug;

use recall_types::SessionRecord;

use crate::error::IndexError;

/// Relevance assigned to substring matches, which carry no native score.
pub const SUBSTRING_RELEVANCE: f64 = 0.5;

/// Read-only handle on the session index database.
#[derive(Debug)]
pub struct SessionIndex {
    conn: Connection,
}

impl SessionIndex {
    /// Open the index at `path`.
    ///
    /// A missing file is reported as [`IndexError::Missing`]; the database
    /// is never created here. The archiving side owns it.
    pub fn open(path: &Path) -> Result<Self, IndexError> {
        if !path.exists() {
            return Err(IndexError::Missing(path.display().to_string()));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Wrap an existing connection. Tests build in-memory databases.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Full-text view: FTS5 MATCH ranked by the engine's native bm25 score.
    ///
    /// bm25 is negative-is-better; display code takes the absolute value.
    /// A malformed match expression surfaces as an error; callers decide
    /// whether that cascades.
    pub fn fulltext(
        &self,
        topic: &str,
        cutoff: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<Vec<SessionRecord>, IndexError> {
        let mut sql = String::from(
            "SELECT
               s.archive_name,
               s.archived_at,
               s.working_directory,
               s.user_messages,
               COALESCE(s.summary, s.preview, '') AS context,
               bm25(sessions_fts) AS relevance
             FROM sessions s
             JOIN sessions_fts ON sessions_fts.rowid = s.id
             WHERE sessions_fts MATCH ?1",
        );
        let mut values: Vec<Box<dyn ToSql>> = vec![Box::new(topic.to_string())];

        if let Some(cutoff) = cutoff {
            let _ = write!(sql, " AND s.archived_at >= ?{}", values.len() + 1);
            values.push(Box::new(format_cutoff(cutoff)));
        }

        let _ = write!(sql, " ORDER BY bm25(sessions_fts) LIMIT ?{}", values.len() + 1);
        values.push(Box::new(limit as i64));

        let records = self.query_records(&sql, &values)?;
        debug!(topic, matches = records.len(), "full-text view queried");
        Ok(records)
    }

    /// Relational view: case-sensitive substring containment over archive
    /// name, summary, and preview, newest first, fixed moderate relevance.
    pub fn substring(
        &self,
        topic: &str,
        cutoff: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<Vec<SessionRecord>, IndexError> {
        let mut sql = format!(
            "SELECT
               archive_name,
               archived_at,
               working_directory,
               user_messages,
               COALESCE(summary, preview, '') AS context,
               {SUBSTRING_RELEVANCE} AS relevance
             FROM sessions
             WHERE (instr(archive_name, ?1) > 0
                 OR instr(COALESCE(summary, ''), ?1) > 0
                 OR instr(COALESCE(preview, ''), ?1) > 0)",
        );
        let mut values: Vec<Box<dyn ToSql>> = vec![Box::new(topic.to_string())];

        if let Some(cutoff) = cutoff {
            let _ = write!(sql, " AND archived_at >= ?{}", values.len() + 1);
            values.push(Box::new(format_cutoff(cutoff)));
        }

        let _ = write!(sql, " ORDER BY archived_at DESC LIMIT ?{}", values.len() + 1);
        values.push(Box::new(limit as i64));

        let records = self.query_records(&sql, &values)?;
        debug!(topic, matches = records.len(), "relational view queried");
        Ok(records)
    }

    fn query_records(
        &self,
        sql: &str,
        values: &[Box<dyn ToSql>],
    ) -> Result<Vec<SessionRecord>, IndexError> {
        let mut stmt = self.conn.prepare(sql)?;
        let params: Vec<&dyn ToSql> = values.iter().map(Box::as_ref).collect();
        let rows = stmt
            .query_map(params.as_slice(), map_session_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

/// Format the cutoff so lexicographic comparison against stored ISO-8601
/// timestamps filters correctly.
fn format_cutoff(cutoff: DateTime<Utc>) -> String {
    cutoff.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn map_session_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SessionRecord> {
    Ok(SessionRecord {
        archive_name: row.get(0)?,
        archived_at: row.get(1)?,
        working_directory: row.get(2)?,
        user_messages: row.get(3)?,
        context: row.get(4)?,
        relevance: row.get(5)?,
    })
}
