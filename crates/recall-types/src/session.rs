//! Archived session records surfaced by retrieval.

use serde::{Deserialize, Serialize};

/// One archived session, as returned by a retrieval tier.
///
/// `relevance` is a signed score whose scale and sign convention depend on
/// the tier that produced it: the full-text view reports its native score
/// (negative is better), the substring and filesystem tiers report a fixed
/// moderate constant. Display code takes the absolute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique archive key (the session directory name)
    pub archive_name: String,
    /// ISO-8601 archive timestamp; `"unknown"` when the source had none
    pub archived_at: String,
    /// Working directory the session ran in
    pub working_directory: String,
    /// Number of user messages in the session
    pub user_messages: i64,
    /// Summary or preview text for display
    pub context: String,
    /// Signed relevance score, tier-dependent
    pub relevance: f64,
}
