//! Index-backed retrieval tiers.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::debug;

use recall_index::SessionIndex;

use crate::retriever::FETCH_LIMIT;
use crate::tier::{RetrievalTier, TierOutcome};

/// Full-text tier: the index's FTS view ranked by its native score.
///
/// Unavailable when the database cannot be opened or the match query
/// itself fails (malformed syntax); a failed query must cascade, not end
/// the chain.
pub struct FullTextTier {
    db_path: PathBuf,
}

impl FullTextTier {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

impl RetrievalTier for FullTextTier {
    fn name(&self) -> &'static str {
        "fulltext"
    }

    fn search(&self, topic: &str, cutoff: Option<DateTime<Utc>>) -> TierOutcome {
        let index = match SessionIndex::open(&self.db_path) {
            Ok(index) => index,
            Err(e) => {
                return TierOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        };
        match index.fulltext(topic, cutoff, FETCH_LIMIT) {
            Ok(records) => TierOutcome::Results(records),
            Err(e) => {
                debug!(topic, error = %e, "full-text query failed");
                TierOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Substring tier: case-sensitive containment over the relational view,
/// newest first, with a fixed moderate relevance.
///
/// Unavailable only when the database cannot be opened.
pub struct SubstringTier {
    db_path: PathBuf,
}

impl SubstringTier {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

impl RetrievalTier for SubstringTier {
    fn name(&self) -> &'static str {
        "substring"
    }

    fn search(&self, topic: &str, cutoff: Option<DateTime<Utc>>) -> TierOutcome {
        let index = match SessionIndex::open(&self.db_path) {
            Ok(index) => index,
            Err(e) => {
                return TierOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        };
        match index.substring(topic, cutoff, FETCH_LIMIT) {
            Ok(records) => TierOutcome::Results(records),
            Err(e) => {
                debug!(topic, error = %e, "substring query failed");
                TierOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}
