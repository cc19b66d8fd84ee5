//! The tag-sorting state machine.
//!
//! [`TagSortState`] owns the partition of tags between the bank and the
//! answer zone, tracks the in-flight drag session, evaluates placements, and
//! resets to a fresh shuffled start. It is the single source of truth for
//! tag placement: adapters render it and forward gestures back as the
//! operations below, never reading placement out of their own markup.
//!
//! Every operation validates before it mutates, so a failed call leaves the
//! state exactly as it was.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::error::EngineError;
use crate::model::{Tag, Zone};
use crate::report::EvaluationResult;

/// One exercise instance: the tag partition plus drag and lock tracking.
///
/// Two orthogonal axes of state: the bank/answer partition (mutated by
/// `move_to`/`toggle`), and the locked flag (`check` locks, `reset`
/// unlocks). The drag session is a transient overlay on top of both.
#[derive(Debug, Clone)]
pub struct TagSortState {
    /// All tags for the active answer set, in catalog order. Never
    /// re-sorted; used as the stable identity reference.
    catalog: Vec<Tag>,
    /// Labels currently in the bank, in display order.
    bank: Vec<String>,
    /// Labels currently in the answer zone, in placement order.
    answer: Vec<String>,
    /// Whether `check` has run since the last reset. While set, the
    /// partition is frozen.
    checked: bool,
    /// The label currently being dragged, if any.
    drag: Option<String>,
}

impl TagSortState {
    /// Create an exercise from a catalog, shuffling the bank with the
    /// thread-local RNG.
    pub fn new(catalog: Vec<Tag>) -> Result<Self, EngineError> {
        Self::with_rng(catalog, &mut rand::thread_rng())
    }

    /// Create an exercise with a caller-supplied RNG (deterministic
    /// shuffles for tests and seeded sessions).
    ///
    /// All labels start in the bank in a uniformly shuffled order. Fails
    /// with `EmptyCatalog` for a zero-tag catalog and `DuplicateLabel` if
    /// the catalog repeats a label; both would make the exercise
    /// unsatisfiable, so no state is constructed.
    pub fn with_rng(catalog: Vec<Tag>, rng: &mut impl Rng) -> Result<Self, EngineError> {
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for tag in &catalog {
            if !seen.insert(tag.label.as_str()) {
                return Err(EngineError::DuplicateLabel(tag.label.clone()));
            }
        }

        let mut bank: Vec<String> = catalog.iter().map(|t| t.label.clone()).collect();
        bank.shuffle(rng);

        tracing::debug!(tags = catalog.len(), "initialized exercise");

        Ok(Self {
            catalog,
            bank,
            answer: Vec::new(),
            checked: false,
            drag: None,
        })
    }

    /// The full catalog, in load order.
    pub fn catalog(&self) -> &[Tag] {
        &self.catalog
    }

    /// Labels currently in the bank.
    pub fn bank(&self) -> &[String] {
        &self.bank
    }

    /// Labels currently in the answer zone.
    pub fn answer(&self) -> &[String] {
        &self.answer
    }

    /// Whether the exercise is locked (checked and not yet reset).
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// The label currently being dragged, if a drag session is active.
    pub fn dragging(&self) -> Option<&str> {
        self.drag.as_deref()
    }

    /// Look up a catalog tag by label.
    pub fn tag(&self, label: &str) -> Option<&Tag> {
        self.catalog.iter().find(|t| t.label == label)
    }

    /// Which zone a label currently sits in, or `None` for unknown labels.
    pub fn zone_of(&self, label: &str) -> Option<Zone> {
        if self.bank.iter().any(|l| l == label) {
            Some(Zone::Bank)
        } else if self.answer.iter().any(|l| l == label) {
            Some(Zone::Answer)
        } else {
            None
        }
    }

    /// Start a drag session for `label`.
    pub fn begin_drag(&mut self, label: &str) -> Result<(), EngineError> {
        if self.checked {
            return Err(EngineError::ExerciseLocked);
        }
        if self.zone_of(label).is_none() {
            return Err(EngineError::InvalidLabel(label.to_string()));
        }
        tracing::debug!(label, "drag started");
        self.drag = Some(label.to_string());
        Ok(())
    }

    /// End any drag session without moving anything.
    ///
    /// Idempotent and callable from any state: adapters call this on every
    /// drag-end or drag-cancel signal so an abandoned gesture never leaves a
    /// stale drag behind. An abandoned drag is a cancellation, never an
    /// implicit move.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!("drag cancelled");
        }
    }

    /// Drop the dragged label into `target`, clearing the drag session.
    ///
    /// Dropping on the zone the label already occupies is a successful
    /// no-op that still clears the drag.
    pub fn move_to(&mut self, target: Zone) -> Result<(), EngineError> {
        if self.checked {
            return Err(EngineError::ExerciseLocked);
        }
        let label = self.drag.take().ok_or(EngineError::NoActiveDrag)?;
        self.place(&label, target);
        Ok(())
    }

    /// Move `label` to whichever zone it is not currently in.
    ///
    /// The click/keyboard path: same placement routine as `move_to`, so both
    /// input methods produce identical partitions.
    pub fn toggle(&mut self, label: &str) -> Result<(), EngineError> {
        if self.checked {
            return Err(EngineError::ExerciseLocked);
        }
        let current = self
            .zone_of(label)
            .ok_or_else(|| EngineError::InvalidLabel(label.to_string()))?;
        self.place(label, current.opposite());
        Ok(())
    }

    /// The single shared placement mutation behind `move_to` and `toggle`.
    ///
    /// Removes `label` from the zone it is in and appends it to `target`;
    /// does nothing if it is already there. Caller has validated the label,
    /// so the partition invariants hold on exit.
    fn place(&mut self, label: &str, target: Zone) {
        let (from, to) = match target {
            Zone::Bank => (&mut self.answer, &mut self.bank),
            Zone::Answer => (&mut self.bank, &mut self.answer),
        };
        if let Some(pos) = from.iter().position(|l| l == label) {
            let moved = from.remove(pos);
            tracing::debug!(label = %moved, %target, "tag moved");
            to.push(moved);
        }
    }

    /// Evaluate the current placement and lock the exercise.
    ///
    /// The only Unlocked→Locked transition. Rejects reentrant calls with
    /// `AlreadyChecked` rather than queueing them.
    pub fn check(&mut self) -> Result<EvaluationResult, EngineError> {
        if self.checked {
            return Err(EngineError::AlreadyChecked);
        }
        self.checked = true;
        let result = EvaluationResult::evaluate(&self.catalog, &self.answer);
        tracing::debug!(
            correct = result.correct_count,
            out_of = result.total_correct,
            "placement checked"
        );
        Ok(result)
    }

    /// Return to a fresh start: all labels back in the bank, reshuffled
    /// with the thread-local RNG, unlocked, no drag.
    pub fn reset(&mut self) {
        self.reset_with_rng(&mut rand::thread_rng());
    }

    /// `reset` with a caller-supplied RNG.
    ///
    /// The only Locked→Unlocked transition; callable from any state.
    pub fn reset_with_rng(&mut self, rng: &mut impl Rng) {
        self.bank = self.catalog.iter().map(|t| t.label.clone()).collect();
        self.bank.shuffle(rng);
        self.answer.clear();
        self.checked = false;
        self.drag = None;
        tracing::debug!("exercise reset");
    }
}
