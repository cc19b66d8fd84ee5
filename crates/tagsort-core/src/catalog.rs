//! JSON tag catalog loading and validation.
//!
//! A catalog file maps answer-set names to ordered arrays of tag records:
//!
//! ```json
//! {
//!     "default": [
//!         { "label": "Relaxed", "correct": true, "feedback": "..." },
//!         { "label": "Chaotic", "correct": false, "feedback": "..." }
//!     ]
//! }
//! ```
//!
//! Loading is a one-shot operation performed before an exercise is
//! initialized; a missing or malformed answer set is a load-time failure,
//! never a runtime one.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::Tag;

/// The collaborator contract consumed by the engine: a named answer set in,
/// an ordered tag sequence out, or a load failure.
pub trait CatalogSource {
    /// Load the tags for one answer set, in catalog order.
    fn load_answer_set(&self, answer_set: &str) -> Result<Vec<Tag>, CatalogError>;

    /// Names of the answer sets this source can provide.
    fn answer_set_names(&self) -> Vec<String>;
}

/// A parsed catalog file: answer-set name → ordered tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogFile {
    pub answer_sets: BTreeMap<String, Vec<Tag>>,
}

impl CatalogFile {
    /// Read and parse a catalog file from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parse a catalog from a JSON string (useful for testing).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(file)
    }
}

impl CatalogSource for CatalogFile {
    fn load_answer_set(&self, answer_set: &str) -> Result<Vec<Tag>, CatalogError> {
        self.answer_sets
            .get(answer_set)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownAnswerSet(answer_set.to_string()))
    }

    fn answer_set_names(&self) -> Vec<String> {
        self.answer_sets.keys().cloned().collect()
    }
}

/// An in-memory catalog source for fixtures and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    sets: BTreeMap<String, Vec<Tag>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an answer set, replacing any previous set of the same name.
    pub fn with_set(mut self, name: impl Into<String>, tags: Vec<Tag>) -> Self {
        self.sets.insert(name.into(), tags);
        self
    }
}

impl CatalogSource for MemoryCatalog {
    fn load_answer_set(&self, answer_set: &str) -> Result<Vec<Tag>, CatalogError> {
        self.sets
            .get(answer_set)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownAnswerSet(answer_set.to_string()))
    }

    fn answer_set_names(&self) -> Vec<String> {
        self.sets.keys().cloned().collect()
    }
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The answer set the warning applies to.
    pub answer_set: String,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog file for issues that would reject or degrade an
/// exercise.
///
/// Duplicate and empty labels are also hard errors at engine ingestion;
/// validation exists so authors see them before a learner does.
pub fn validate_catalog(file: &CatalogFile) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (set_name, tags) in &file.answer_sets {
        if tags.is_empty() {
            warnings.push(ValidationWarning {
                answer_set: set_name.clone(),
                message: "answer set has no tags".into(),
            });
        }

        let mut seen = HashSet::new();
        for tag in tags {
            if tag.label.trim().is_empty() {
                warnings.push(ValidationWarning {
                    answer_set: set_name.clone(),
                    message: "tag has an empty label".into(),
                });
            } else if !seen.insert(tag.label.as_str()) {
                warnings.push(ValidationWarning {
                    answer_set: set_name.clone(),
                    message: format!("duplicate label: {}", tag.label),
                });
            }

            if tag.feedback.trim().is_empty() {
                warnings.push(ValidationWarning {
                    answer_set: set_name.clone(),
                    message: format!("tag '{}' has no feedback text", tag.label),
                });
            }
        }
    }

    warnings
}
