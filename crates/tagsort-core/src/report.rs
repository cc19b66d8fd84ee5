//! Evaluation result types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Tag;

/// Per-chip verdict for one label the learner placed in the answer zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOutcome {
    /// The tag's label.
    pub label: String,
    /// Whether the catalog marks this tag as a correct answer.
    pub is_correct: bool,
    /// Feedback text from the catalog.
    pub feedback: String,
}

/// The result of checking one placement.
///
/// Correctness is a property of the catalog, independent of where a tag sits
/// at check time: `total_correct` is computed over the full catalog, so a
/// correct tag left in the bank still counts toward the achievable maximum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Unique identifier for this evaluation.
    pub id: Uuid,
    /// When the evaluation ran.
    pub created_at: DateTime<Utc>,
    /// Per-chip verdicts, in answer-zone order.
    pub outcomes: Vec<TagOutcome>,
    /// How many answer-zone tags are correct.
    pub correct_count: usize,
    /// How many catalog tags are correct overall (the maximum score).
    pub total_correct: usize,
}

impl EvaluationResult {
    /// Evaluate a placement. Pure in `(catalog, answer)`: repeated
    /// evaluation of the same placement yields identical verdicts and counts.
    pub fn evaluate(catalog: &[Tag], answer: &[String]) -> Self {
        let outcomes: Vec<TagOutcome> = answer
            .iter()
            .filter_map(|label| match catalog.iter().find(|t| &t.label == label) {
                Some(tag) => Some(TagOutcome {
                    label: tag.label.clone(),
                    is_correct: tag.correct,
                    feedback: tag.feedback.clone(),
                }),
                None => {
                    // Unreachable when the answer zone came from a valid
                    // engine state; tolerated for direct callers.
                    tracing::warn!("answer label '{label}' not in catalog, skipping");
                    None
                }
            })
            .collect();

        let correct_count = outcomes.iter().filter(|o| o.is_correct).count();
        let total_correct = catalog.iter().filter(|t| t.correct).count();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            outcomes,
            correct_count,
            total_correct,
        }
    }

    /// Whether every correct tag was placed and nothing incorrect was.
    ///
    /// Convenience for adapters; whether a correct tag left in the bank
    /// costs the learner anything is an adapter-level policy.
    pub fn is_full_credit(&self) -> bool {
        self.correct_count == self.total_correct && self.outcomes.len() == self.correct_count
    }

    /// Save the result as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize result")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write result to {}", path.display()))?;
        Ok(())
    }

    /// Load a previously saved result.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read result from {}", path.display()))?;
        let result: EvaluationResult =
            serde_json::from_str(&content).context("failed to parse result JSON")?;
        Ok(result)
    }
}
