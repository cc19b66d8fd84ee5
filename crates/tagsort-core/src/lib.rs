//! tagsort-core — Core tag-sorting exercise engine.
//!
//! This crate defines the data model, catalog loading, and the partition /
//! evaluation state machine that the rest of the tagsort system builds on.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod model;
pub mod report;
