//! # recall-index
//!
//! SQLite adapter over the session index: the queryable store the
//! archiving side maintains for every archived session.
//!
//! The index exposes two views over the same records:
//!
//! - a **full-text view** (`sessions_fts`, FTS5) ranked by the engine's
//!   native bm25 score, where more negative means more relevant
//! - a **relational view** (`sessions`) filterable by substring
//!   containment and by archive timestamp
//!
//! Absence of the database is a supported condition: callers treat it as
//! the index being unavailable, never as a fatal error.
//!
//! ## Modules
//!
//! - [`store`]: the read-side [`SessionIndex`] handle
//! - [`schema`]: table/index/trigger DDL for tests and fixtures
//! - [`error`]: the crate error type

pub mod error;
pub mod schema;
pub mod store;

pub use error::IndexError;
pub use schema::apply_schema;
pub use store::{SessionIndex, SUBSTRING_RELEVANCE};
