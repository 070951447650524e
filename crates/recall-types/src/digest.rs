//! Digest types produced by transcript extraction.

use serde::{Deserialize, Serialize};

/// Categories of key points mined from assistant messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPointCategory {
    /// Choices made during the session ("decided", "chose", ...)
    Decision,
    /// Work that was finished ("completed", "tests pass", ...)
    Completion,
    /// Results and takeaways ("result:", "summary:", ...)
    Outcome,
    /// Open work ("next:", "todo:", "still need", ...)
    InProgress,
}

impl KeyPointCategory {
    /// All categories, in digest order.
    pub const ALL: [KeyPointCategory; 4] = [
        KeyPointCategory::Decision,
        KeyPointCategory::Completion,
        KeyPointCategory::Outcome,
        KeyPointCategory::InProgress,
    ];

    /// Maximum snippets a digest keeps for this category after dedup.
    pub fn cap(&self) -> usize {
        match self {
            KeyPointCategory::Decision | KeyPointCategory::Completion => 5,
            KeyPointCategory::Outcome | KeyPointCategory::InProgress => 3,
        }
    }

    /// Stable identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyPointCategory::Decision => "decision",
            KeyPointCategory::Completion => "completion",
            KeyPointCategory::Outcome => "outcome",
            KeyPointCategory::InProgress => "in_progress",
        }
    }
}

/// One classified snippet: a trimmed, length-bounded fragment that
/// contained a trigger phrase for its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    /// Which trigger set matched
    pub category: KeyPointCategory,
    /// Trimmed sentence-like fragment, at most 150 chars
    pub snippet: String,
}

/// Condensed structured summary of one transcript.
///
/// Built once per transcript by the digest builder; category lists are
/// deduplicated and capped (5 decisions, 5 completions, 3 outcomes,
/// 3 in-progress) before the digest is sealed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionDigest {
    /// Decision snippets, first-seen order
    pub decisions: Vec<String>,
    /// Completion snippets, first-seen order
    pub completions: Vec<String>,
    /// Outcome snippets, first-seen order
    pub outcomes: Vec<String>,
    /// In-progress snippets, first-seen order
    pub in_progress: Vec<String>,
    /// First qualifying user message, truncated to 200 chars
    pub first_user_message: String,
    /// Most recent qualifying user message, truncated to 200 chars
    pub last_user_message: String,
    /// Count of qualifying user messages
    pub user_messages: usize,
    /// Count of qualifying assistant messages
    pub assistant_messages: usize,
}

impl SessionDigest {
    /// Snippets for one category.
    pub fn category(&self, category: KeyPointCategory) -> &[String] {
        match category {
            KeyPointCategory::Decision => &self.decisions,
            KeyPointCategory::Completion => &self.completions,
            KeyPointCategory::Outcome => &self.outcomes,
            KeyPointCategory::InProgress => &self.in_progress,
        }
    }
}
