//! Engine and catalog error types.
//!
//! Defined here so presentation adapters can match on failure kinds directly
//! instead of string matching. Every variant is a recoverable condition: the
//! engine's state is left untouched whenever one of these is returned.

use thiserror::Error;

/// Errors returned by [`crate::engine::TagSortState`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The catalog handed to the engine contained no tags.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// Catalog ingestion produced two tags with the same label.
    #[error("duplicate label in catalog: {0}")]
    DuplicateLabel(String),

    /// An operation referenced a label that is not in the catalog.
    #[error("unknown label: {0}")]
    InvalidLabel(String),

    /// A placement mutation was attempted after `check()`.
    #[error("exercise is locked after checking; reset to continue")]
    ExerciseLocked,

    /// `move_to` was called with no drag session active.
    #[error("no drag in progress")]
    NoActiveDrag,

    /// `check()` was called twice without an intervening reset.
    #[error("answers already checked; reset before checking again")]
    AlreadyChecked,
}

impl EngineError {
    /// Returns `true` if the failure is cleared by `reset()` rather than by
    /// correcting the call (the two lock-related variants).
    pub fn needs_reset(&self) -> bool {
        matches!(self, EngineError::ExerciseLocked | EngineError::AlreadyChecked)
    }
}

/// Errors from the catalog-loading collaborator.
///
/// These surface to the adapter unchanged; a failed load must never leave a
/// partially initialized exercise behind.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file was not valid JSON in the expected shape.
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The requested answer set does not exist in the catalog file.
    #[error("answer set not found: {0}")]
    UnknownAnswerSet(String),
}
