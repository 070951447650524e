//! The uniform tier contract for the retrieval fallback chain.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use recall_types::SessionRecord;

/// What one tier produced for a query.
#[derive(Debug)]
pub enum TierOutcome {
    /// The tier cannot serve queries right now; the chain moves on.
    Unavailable {
        /// Human-readable cause, for logs
        reason: String,
    },

    /// The tier answered. An empty answer is still an answer: the chain
    /// stops here and does not consult further tiers.
    Results(Vec<SessionRecord>),
}

/// One retrieval strategy in the fallback chain.
///
/// Matching is substring/keyword containment by contract, never fuzzy or
/// semantic. Each tier owns its own relevance convention.
pub trait RetrievalTier {
    /// Name used in logs and fallback diagnostics.
    fn name(&self) -> &'static str;

    /// Run the query. `cutoff` excludes sessions archived before it.
    fn search(&self, topic: &str, cutoff: Option<DateTime<Utc>>) -> TierOutcome;
}

/// Scripted tier for exercising the fallback chain in tests.
pub struct StubTier {
    name: &'static str,
    outcome: StubOutcome,
    calls: Rc<Cell<usize>>,
}

#[derive(Clone)]
enum StubOutcome {
    Unavailable,
    Results(Vec<SessionRecord>),
}

impl StubTier {
    /// A tier that always reports itself unavailable.
    pub fn unavailable(name: &'static str) -> Self {
        Self {
            name,
            outcome: StubOutcome::Unavailable,
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// A tier that always answers with `records`.
    pub fn with_results(name: &'static str, records: Vec<SessionRecord>) -> Self {
        Self {
            name,
            outcome: StubOutcome::Results(records),
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Shared call counter; clones stay valid after the tier is boxed away.
    pub fn call_count(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl RetrievalTier for StubTier {
    fn name(&self) -> &'static str {
        self.name
    }

    fn search(&self, _topic: &str, _cutoff: Option<DateTime<Utc>>) -> TierOutcome {
        self.calls.set(self.calls.get() + 1);
        match &self.outcome {
            StubOutcome::Unavailable => TierOutcome::Unavailable {
                reason: "scripted".to_string(),
            },
            StubOutcome::Results(records) => TierOutcome::Results(records.clone()),
        }
    }
}
