//! Rule-based key-point classification.
//!
//! Scans message bodies for category-defining trigger phrases and extracts
//! the sentence-like fragments that contain them. Trigger sets are
//! configuration data: the defaults are the compatibility baseline and
//! callers may substitute their own lists.

use serde::{Deserialize, Serialize};

use recall_types::{CategoryMatch, KeyPointCategory};
use recall_types::text::truncate_chars;

/// Maximum snippet length in characters.
const SNIPPET_MAX_CHARS: usize = 150;

/// Fragments at or under this trimmed length are noise, not snippets.
const MIN_UNIT_CHARS: usize = 10;

/// Trigger phrase lists, one per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Phrases that indicate a decision was made
    pub decisions: Vec<String>,

    /// Phrases that indicate work was finished
    pub completions: Vec<String>,

    /// Phrases that introduce results and takeaways
    pub outcomes: Vec<String>,

    /// Phrases that flag open or upcoming work
    pub in_progress: Vec<String>,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        let list = |items: &[&str]| -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        };
        Self {
            decisions: list(&[
                "decided",
                "will use",
                "going with",
                "chose",
                "selected",
                "the plan is",
                "approach:",
                "solution:",
                "we'll",
                "let's go with",
            ]),
            completions: list(&[
                "completed",
                "finished",
                "done",
                "implemented",
                "fixed",
                "resolved",
                "working now",
                "tests pass",
                "deployed",
            ]),
            outcomes: list(&[
                "result:",
                "outcome:",
                "conclusion:",
                "summary:",
                "in summary",
                "to summarize",
                "key takeaway",
            ]),
            in_progress: list(&[
                "next:",
                "todo:",
                "still need",
                "remaining:",
                "next step",
                "will need to",
                "should also",
                "don't forget",
            ]),
        }
    }
}

impl TriggerConfig {
    /// Triggers for one category.
    pub fn triggers(&self, category: KeyPointCategory) -> &[String] {
        match category {
            KeyPointCategory::Decision => &self.decisions,
            KeyPointCategory::Completion => &self.completions,
            KeyPointCategory::Outcome => &self.outcomes,
            KeyPointCategory::InProgress => &self.in_progress,
        }
    }
}

/// Classifier that extracts key-point snippets from message bodies.
#[derive(Debug, Clone, Default)]
pub struct KeyPointClassifier {
    config: TriggerConfig,
}

impl KeyPointClassifier {
    /// Classifier with the default trigger lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier with custom trigger lists.
    pub fn with_config(config: TriggerConfig) -> Self {
        Self { config }
    }

    /// Extract snippets for every category from one body.
    ///
    /// Categories are evaluated independently: a single body may
    /// contribute to several categories and several snippets per category.
    pub fn classify(&self, body: &str) -> Vec<CategoryMatch> {
        let mut matches = Vec::new();
        for category in KeyPointCategory::ALL {
            for snippet in extract_snippets(body, self.config.triggers(category)) {
                matches.push(CategoryMatch { category, snippet });
            }
        }
        matches
    }
}

/// Find sentence-like units of `body` containing any trigger phrase.
///
/// Matching is case-insensitive substring containment. Units come from
/// splitting on `.`, `!`, `?`, and newlines. A unit qualifies when its
/// trimmed length exceeds 10 chars; the snippet is the trimmed unit cut to
/// 150 chars. Duplicate snippets within one body are dropped, first seen
/// wins.
pub fn extract_snippets(body: &str, triggers: &[String]) -> Vec<String> {
    let body_lower = body.to_lowercase();
    let mut snippets: Vec<String> = Vec::new();

    for trigger in triggers {
        let trigger = trigger.to_lowercase();
        if !body_lower.contains(&trigger) {
            continue;
        }
        for unit in body.split(['.', '!', '?', '\n']) {
            let trimmed = unit.trim();
            if trimmed.chars().count() <= MIN_UNIT_CHARS {
                continue;
            }
            if !trimmed.to_lowercase().contains(&trigger) {
                continue;
            }
            let snippet = truncate_chars(trimmed, SNIPPET_MAX_CHARS);
            if !snippets.contains(&snippet) {
                snippets.push(snippet);
            }
        }
    }

    snippets
}
