//! Property tests for the partition and lock invariants.
//!
//! The engine must hold three structural invariants after every operation,
//! successful or not: the bank and answer zones are disjoint, their union is
//! the full label set, and no zone repeats a label.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tagsort_core::engine::TagSortState;
use tagsort_core::model::{Tag, Zone};
use tagsort_core::report::EvaluationResult;

const LABELS: [&str; 5] = ["Calm", "Busy", "Warm", "Harsh", "Open"];

fn catalog() -> Vec<Tag> {
    LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| Tag::new(*label, i % 2 == 0, format!("feedback for {label}")))
        .collect()
}

fn seeded_state(seed: u64) -> TagSortState {
    TagSortState::with_rng(catalog(), &mut StdRng::seed_from_u64(seed)).unwrap()
}

/// One user gesture, as the presentation adapter would forward it.
#[derive(Debug, Clone)]
enum Op {
    Toggle(usize),
    BeginDrag(usize),
    EndDrag,
    MoveTo(Zone),
    Check,
    Reset(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..LABELS.len()).prop_map(Op::Toggle),
        (0..LABELS.len()).prop_map(Op::BeginDrag),
        Just(Op::EndDrag),
        prop_oneof![Just(Zone::Bank), Just(Zone::Answer)].prop_map(Op::MoveTo),
        Just(Op::Check),
        any::<u64>().prop_map(Op::Reset),
    ]
}

fn apply(state: &mut TagSortState, op: &Op) {
    // Results are deliberately ignored: the invariants must survive failed
    // calls exactly as they survive successful ones.
    match op {
        Op::Toggle(i) => {
            let _ = state.toggle(LABELS[*i]);
        }
        Op::BeginDrag(i) => {
            let _ = state.begin_drag(LABELS[*i]);
        }
        Op::EndDrag => state.end_drag(),
        Op::MoveTo(zone) => {
            let _ = state.move_to(*zone);
        }
        Op::Check => {
            let _ = state.check();
        }
        Op::Reset(seed) => state.reset_with_rng(&mut StdRng::seed_from_u64(*seed)),
    }
}

fn assert_invariants(state: &TagSortState) {
    let mut all: Vec<&str> = state
        .bank()
        .iter()
        .chain(state.answer())
        .map(String::as_str)
        .collect();
    all.sort_unstable();

    let mut expected: Vec<&str> = LABELS.to_vec();
    expected.sort_unstable();

    // Union equals the catalog and, since lengths match, nothing repeats.
    assert_eq!(all, expected, "partition invariant violated");

    if let Some(dragged) = state.dragging() {
        assert!(
            state.zone_of(dragged).is_some(),
            "drag session references unknown label {dragged}"
        );
    }
}

proptest! {
    #[test]
    fn partition_survives_any_gesture_sequence(
        seed in any::<u64>(),
        ops in proptest::collection::vec(op_strategy(), 0..60),
    ) {
        let mut state = seeded_state(seed);
        assert_invariants(&state);
        for op in &ops {
            apply(&mut state, op);
            assert_invariants(&state);
        }
    }

    #[test]
    fn lock_freezes_the_partition(
        seed in any::<u64>(),
        setup in proptest::collection::vec(0..LABELS.len(), 0..10),
        attempts in proptest::collection::vec(op_strategy(), 1..20),
    ) {
        let mut state = seeded_state(seed);
        for i in &setup {
            state.toggle(LABELS[*i]).unwrap();
        }
        state.check().unwrap();

        let bank = state.bank().to_vec();
        let answer = state.answer().to_vec();

        for op in &attempts {
            match op {
                // Reset is the unlock operation; stop the scenario there.
                Op::Reset(_) => break,
                op => {
                    apply(&mut state, op);
                    prop_assert_eq!(state.bank(), bank.as_slice());
                    prop_assert_eq!(state.answer(), answer.as_slice());
                    prop_assert!(state.is_checked());
                }
            }
        }

        // Reset always succeeds regardless of lock state.
        state.reset_with_rng(&mut StdRng::seed_from_u64(seed));
        prop_assert!(!state.is_checked());
        prop_assert_eq!(state.bank().len(), LABELS.len());
    }

    #[test]
    fn toggling_twice_restores_the_partition(
        seed in any::<u64>(),
        idx in 0..LABELS.len(),
    ) {
        let mut state = seeded_state(seed);
        let zone_before = state.zone_of(LABELS[idx]).unwrap();

        state.toggle(LABELS[idx]).unwrap();
        prop_assert_eq!(state.zone_of(LABELS[idx]).unwrap(), zone_before.opposite());

        state.toggle(LABELS[idx]).unwrap();
        prop_assert_eq!(state.zone_of(LABELS[idx]).unwrap(), zone_before);
        assert_invariants(&state);
    }

    #[test]
    fn end_drag_never_changes_placement(
        seed in any::<u64>(),
        idx in 0..LABELS.len(),
    ) {
        let mut state = seeded_state(seed);
        let bank = state.bank().to_vec();

        state.begin_drag(LABELS[idx]).unwrap();
        state.end_drag();
        state.end_drag();

        prop_assert_eq!(state.bank(), bank.as_slice());
        prop_assert!(state.dragging().is_none());
    }

    #[test]
    fn evaluation_is_a_pure_function_of_the_placement(
        placed in proptest::collection::vec(0..LABELS.len(), 0..LABELS.len()),
    ) {
        let catalog = catalog();
        let mut answer: Vec<String> = Vec::new();
        for i in placed {
            if !answer.iter().any(|l| l == LABELS[i]) {
                answer.push(LABELS[i].to_string());
            }
        }

        let first = EvaluationResult::evaluate(&catalog, &answer);
        let second = EvaluationResult::evaluate(&catalog, &answer);

        prop_assert_eq!(&first.outcomes, &second.outcomes);
        prop_assert_eq!(first.correct_count, second.correct_count);
        prop_assert_eq!(first.total_correct, second.total_correct);
        prop_assert_eq!(
            first.total_correct,
            catalog.iter().filter(|t| t.correct).count()
        );
    }
}

/// Reshuffle coverage: over many seeded initializations of a three-tag
/// catalog, every one of the six bank orderings shows up with roughly
/// uniform frequency. Statistical bounds, not exact equality.
#[test]
fn shuffle_covers_all_permutations_roughly_uniformly() {
    let small: Vec<Tag> = ["X", "Y", "Z"]
        .iter()
        .map(|l| Tag::new(*l, false, ""))
        .collect();

    const TRIALS: usize = 6_000;
    let mut counts: std::collections::HashMap<Vec<String>, usize> = std::collections::HashMap::new();

    for seed in 0..TRIALS as u64 {
        let state =
            TagSortState::with_rng(small.clone(), &mut StdRng::seed_from_u64(seed)).unwrap();
        *counts.entry(state.bank().to_vec()).or_default() += 1;
    }

    assert_eq!(counts.len(), 6, "all 3! orderings should appear");

    // Expected 1000 per permutation; ±30% is far beyond any plausible
    // deviation for a fair shuffle at this sample size.
    for (perm, count) in &counts {
        assert!(
            (700..=1300).contains(count),
            "permutation {perm:?} appeared {count} times in {TRIALS} trials"
        );
    }
}

/// `reset` reshuffles too, not just `new`.
#[test]
fn reset_reshuffles_the_bank() {
    let tags: Vec<Tag> = (0..8).map(|i| Tag::new(format!("tag-{i}"), false, "")).collect();
    let mut state = TagSortState::with_rng(tags, &mut StdRng::seed_from_u64(0)).unwrap();
    let initial = state.bank().to_vec();

    // At least one of a handful of reseeded resets must produce a different
    // order; 8! orderings make a repeat across all five vanishingly unlikely.
    let mut saw_different = false;
    for seed in 1..=5 {
        state.reset_with_rng(&mut StdRng::seed_from_u64(seed));
        if state.bank() != initial.as_slice() {
            saw_different = true;
        }
    }
    assert!(saw_different, "reset never changed the bank ordering");
}
