//! # recall-types
//!
//! Shared types for the session-recall system.
//!
//! ## Core Concepts
//!
//! - **Digest**: condensed structured summary of one transcript
//!   ([`SessionDigest`], [`CategoryMatch`], [`KeyPointCategory`])
//! - **Archive entry**: one stored past session as surfaced by retrieval
//!   ([`SessionRecord`])
//! - **Settings**: layered configuration (defaults, config file,
//!   environment, CLI overrides)
//!
//! ## Modules
//!
//! - [`digest`]: digest types and category caps
//! - [`session`]: archived session records
//! - [`config`]: configuration loading
//! - [`error`]: the unified error type
//! - [`text`]: small text helpers shared across the pipeline

pub mod config;
pub mod digest;
pub mod error;
pub mod session;
pub mod text;

pub use config::Settings;
pub use digest::{CategoryMatch, KeyPointCategory, SessionDigest};
pub use error::RecallError;
pub use session::SessionRecord;
