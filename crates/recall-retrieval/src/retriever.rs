//! The tiered retrieval orchestrator.

use tracing::{debug, info};

use recall_types::{SessionRecord, Settings};

use crate::filesystem::FilesystemTier;
use crate::index_tiers::{FullTextTier, SubstringTier};
use crate::tier::{RetrievalTier, TierOutcome};
use crate::window::RecencyWindow;

/// Records fetched per query; keeps ranking stable past the display cut.
pub const FETCH_LIMIT: usize = 5;

/// Ordered fallback chain over the retrieval tiers.
///
/// Tiers are tried in order. An unavailable tier cascades to the next; a
/// tier that answers, even with nothing, ends the chain. Result sets are
/// never merged across tiers.
pub struct SessionRetriever {
    tiers: Vec<Box<dyn RetrievalTier>>,
}

impl SessionRetriever {
    /// Standard chain: full-text index, substring index, filesystem scan.
    pub fn new(settings: &Settings) -> Self {
        let db_path = settings.index_path();
        let archive_dir = settings.archive_path();
        Self::with_tiers(vec![
            Box::new(FullTextTier::new(db_path.clone())),
            Box::new(SubstringTier::new(db_path.clone())),
            Box::new(FilesystemTier::new(archive_dir, db_path)),
        ])
    }

    /// Custom chain; tests script their own tiers.
    pub fn with_tiers(tiers: Vec<Box<dyn RetrievalTier>>) -> Self {
        Self { tiers }
    }

    /// Find sessions related to `topic` within the recency window.
    ///
    /// Never fails: an exhausted chain is an empty result set.
    pub fn retrieve(&self, topic: &str, window: RecencyWindow) -> Vec<SessionRecord> {
        let cutoff = window.cutoff();

        for tier in &self.tiers {
            match tier.search(topic, cutoff) {
                TierOutcome::Unavailable { reason } => {
                    debug!(tier = tier.name(), %reason, "tier unavailable, falling back");
                }
                TierOutcome::Results(mut records) => {
                    info!(tier = tier.name(), matches = records.len(), "retrieval served");
                    records.truncate(FETCH_LIMIT);
                    return records;
                }
            }
        }

        debug!(topic, "no retrieval tier available");
        Vec::new()
    }
}
