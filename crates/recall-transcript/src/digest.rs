//! Digest building: one pass over a transcript, one digest out.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use recall_types::text::truncate_chars;
use recall_types::{KeyPointCategory, RecallError, SessionDigest};

use crate::classifier::KeyPointClassifier;
use crate::normalizer::{normalize, Role};

/// Bodies shorter than this are skipped outright: not counted, not
/// previewed, not classified.
const MIN_BODY_CHARS: usize = 10;

/// User message previews are capped at this many characters.
const PREVIEW_MAX_CHARS: usize = 200;

/// Accumulates classifier output across a transcript.
///
/// Feed records one at a time with [`push`](DigestBuilder::push), then call
/// [`finish`](DigestBuilder::finish): category lists are deduplicated
/// (first seen wins) and capped there, and the digest is immutable after.
#[derive(Debug, Default)]
pub struct DigestBuilder {
    classifier: KeyPointClassifier,
    decisions: Vec<String>,
    completions: Vec<String>,
    outcomes: Vec<String>,
    in_progress: Vec<String>,
    first_user_message: String,
    last_user_message: String,
    user_messages: usize,
    assistant_messages: usize,
}

impl DigestBuilder {
    /// Builder with the default classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with a custom classifier.
    pub fn with_classifier(classifier: KeyPointClassifier) -> Self {
        Self {
            classifier,
            ..Self::default()
        }
    }

    /// Feed one raw transcript record.
    ///
    /// User records update counters and previews; assistant records are
    /// classified; everything else passes through uncounted.
    pub fn push(&mut self, record: &Value) {
        let message = normalize(record);
        if message.body.chars().count() < MIN_BODY_CHARS {
            return;
        }

        match message.role {
            Role::User => {
                self.user_messages += 1;
                if self.first_user_message.is_empty() {
                    self.first_user_message = truncate_chars(&message.body, PREVIEW_MAX_CHARS);
                }
                self.last_user_message = truncate_chars(&message.body, PREVIEW_MAX_CHARS);
            }
            Role::Assistant => {
                self.assistant_messages += 1;
                for m in self.classifier.classify(&message.body) {
                    self.list_mut(m.category).push(m.snippet);
                }
            }
            Role::Other(_) => {}
        }
    }

    /// Deduplicate, cap, and seal the digest.
    pub fn finish(self) -> SessionDigest {
        SessionDigest {
            decisions: dedup_and_cap(self.decisions, KeyPointCategory::Decision.cap()),
            completions: dedup_and_cap(self.completions, KeyPointCategory::Completion.cap()),
            outcomes: dedup_and_cap(self.outcomes, KeyPointCategory::Outcome.cap()),
            in_progress: dedup_and_cap(self.in_progress, KeyPointCategory::InProgress.cap()),
            first_user_message: self.first_user_message,
            last_user_message: self.last_user_message,
            user_messages: self.user_messages,
            assistant_messages: self.assistant_messages,
        }
    }

    fn list_mut(&mut self, category: KeyPointCategory) -> &mut Vec<String> {
        match category {
            KeyPointCategory::Decision => &mut self.decisions,
            KeyPointCategory::Completion => &mut self.completions,
            KeyPointCategory::Outcome => &mut self.outcomes,
            KeyPointCategory::InProgress => &mut self.in_progress,
        }
    }
}

/// Drop exact duplicates (first seen wins), then truncate to `cap`.
fn dedup_and_cap(list: Vec<String>, cap: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in list {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out.truncate(cap);
    out
}

/// Stream a JSONL transcript from disk and build its digest.
///
/// A transcript that cannot be opened or read is fatal; blank lines and
/// lines that fail to parse as JSON are skipped silently.
pub fn digest_transcript(
    path: &Path,
    classifier: KeyPointClassifier,
) -> Result<SessionDigest, RecallError> {
    let file = File::open(path)
        .map_err(|e| RecallError::Transcript(format!("cannot open {}: {e}", path.display())))?;
    let reader = BufReader::new(file);
    let mut builder = DigestBuilder::with_classifier(classifier);

    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line
            .map_err(|e| RecallError::Transcript(format!("cannot read {}: {e}", path.display())))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(record) => builder.push(&record),
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(path = %path.display(), skipped, "skipped unparseable transcript lines");
    }

    Ok(builder.finish())
}
