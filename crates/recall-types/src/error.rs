//! Error types for the session-recall system.

use thiserror::Error;

/// Unified error type for recall operations.
#[derive(Debug, Error)]
pub enum RecallError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transcript source error (missing or unreadable file)
    #[error("Transcript error: {0}")]
    Transcript(String),

    /// Session index error
    #[error("Index error: {0}")]
    Index(String),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),
}
