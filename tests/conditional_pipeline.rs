//! End-to-end scenarios for conditional pipelines.
//!
//! These tests exercise whole pipeline expressions the way caller code
//! writes them: construction, composition, branch selection, and value
//! production in a single chain.

use condflow::prelude::*;
use rstest::rstest;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[rstest]
fn eager_condition_round_trips() {
    assert!(Conditional::when(true).value());
    assert!(!Conditional::when(false).value());
}

#[rstest]
fn and_is_false_when_either_side_is_false() {
    assert!(!Conditional::when(true).and(false).value());
    assert!(
        !Conditional::when_lazy(|| true)
            .and_lazy(|| false)
            .value()
    );
}

#[rstest]
fn composing_twice_from_one_base_leaves_it_untouched() {
    let base = Conditional::when_lazy(|| true);
    let still_true = base.or(false);
    let now_false = base.and(false);

    assert!(still_true.value());
    assert!(!now_false.value());
    assert!(base.value());
}

#[rstest]
fn empty_option_bridges_to_false() {
    assert!(!Conditional::when_present(&None::<i32>).value());
    assert!(Conditional::when_present(&Some(0)).value());
}

#[rstest]
fn failed_evaluation_is_retried_then_cached() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let pipeline = Conditional::when_lazy(move || {
        let call = counter_clone.fetch_add(1, Ordering::SeqCst);
        assert!(call != 0, "not done");
        true
    });

    // First terminal call propagates the panic without caching anything.
    let first = catch_unwind(AssertUnwindSafe(|| pipeline.value()));
    assert!(first.is_err());

    // Second call retries, succeeds, and the result sticks.
    assert!(pipeline.value());
    assert_eq!(counter.load(Ordering::SeqCst), 2);

    for _ in 0..5 {
        assert!(pipeline.value());
    }
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[rstest]
#[case(true, 1)]
#[case(false, 0)]
fn choose_supplies_exactly_one_branch(#[case] condition: bool, #[case] expected: u32) {
    let other_branch = AtomicUsize::new(0);

    let chosen = Conditional::when_lazy(move || condition).choose(
        || {
            if !condition {
                other_branch.fetch_add(1, Ordering::SeqCst);
            }
            1u32
        },
        || {
            if condition {
                other_branch.fetch_add(1, Ordering::SeqCst);
            }
            0u32
        },
    );

    assert_eq!(chosen.into_option(), Some(expected));
    assert_eq!(other_branch.load(Ordering::SeqCst), 0);
}

#[rstest]
fn then_get_produces_value_on_true_only() {
    let produced = Conditional::when_lazy(|| true).then_get(|| 1);
    assert!(produced.is_present());
    assert_eq!(produced.into_option(), Some(1));

    let empty = Conditional::when_lazy(|| false).then_get(|| 1);
    assert!(empty.is_absent());
}

#[rstest]
fn run_branches_then_keep_chaining() {
    let side_effects = AtomicUsize::new(0);

    let flipped = Conditional::when(true)
        .then_run(|| {
            side_effects.fetch_add(1, Ordering::SeqCst);
        })
        .else_run(|| unreachable!("condition is true"))
        .is_false();

    assert_eq!(side_effects.load(Ordering::SeqCst), 1);
    assert!(!flipped.value());
}

#[rstest]
fn is_false_negates_a_lazy_condition() {
    assert!(Conditional::when_lazy(|| false).is_false().value());
}

#[rstest]
fn pipeline_value_maps_through_to_a_result() {
    let saved = Conditional::when_lazy(|| true)
        .then_get(|| 10u64)
        .map(|id| id + 1)
        .ok_or_else(|| "insert failed");
    assert_eq!(saved, Ok(11));

    let failed = Conditional::when(false)
        .then_get(|| 10u64)
        .map(|id| id + 1)
        .ok_or_else(|| "insert failed");
    assert_eq!(failed, Err("insert failed"));
}

#[rstest]
fn shared_pipeline_evaluates_once_across_threads() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let pipeline = Arc::new(
        Conditional::when_lazy(move || {
            counter_clone.fetch_add(1, Ordering::SeqCst);
            true
        })
        .and(true),
    );

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let pipeline = Arc::clone(&pipeline);
            thread::spawn(move || pipeline.value())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }

    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[rstest]
fn cloned_pipeline_shares_the_cache() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let original = Conditional::when_lazy(move || {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        true
    });
    let clone = original.clone();

    assert!(original.value());
    assert!(clone.value());
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}
