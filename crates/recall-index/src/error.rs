//! Error type for session index access.

use thiserror::Error;

/// Errors surfaced by the session index adapter.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index database does not exist at the expected path
    #[error("session index not found at {0}")]
    Missing(String),

    /// Underlying SQLite failure (unreadable database, bad query syntax)
    #[error("session index query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
