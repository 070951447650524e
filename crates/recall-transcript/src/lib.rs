//! # recall-transcript
//!
//! Transcript digestion for the session-recall system: reduce one JSONL
//! session transcript to a short structured digest of decisions,
//! completions, outcomes, and open work.
//!
//! ## Core Concepts
//!
//! - **Normalization**: one heterogeneous transcript record in, one
//!   `(role, body)` pair out; unknown shapes degrade to empty, never error
//! - **Classification**: case-insensitive trigger phrases select
//!   sentence-like snippets, one trigger set per category
//! - **Digest building**: a single pass over the transcript accumulates
//!   snippets, previews, and counts; dedup and caps apply at the end
//!
//! ## Modules
//!
//! - [`normalizer`]: record-to-message reduction
//! - [`classifier`]: trigger configuration and snippet extraction
//! - [`digest`]: the builder and the file entry point

pub mod classifier;
pub mod digest;
pub mod normalizer;

pub use classifier::{extract_snippets, KeyPointClassifier, TriggerConfig};
pub use digest::{digest_transcript, DigestBuilder};
pub use normalizer::{normalize, NormalizedMessage, Role};
