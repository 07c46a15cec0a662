//! Unit tests for etude-skip
//!
//! The wrapper is pure (no IO), so every code path is testable with plain
//! in-memory iterators.

use test_case::test_case;

use crate::seq::{SkipError, SkipSequence};

// ============================================================================
// Test Helpers
// ============================================================================

fn seq_of(values: &[i64]) -> SkipSequence<std::vec::IntoIter<i64>> {
    SkipSequence::new(values.to_vec().into_iter())
}

/// Drains every remaining value.
fn drain<I: Iterator<Item = i64>>(seq: &mut SkipSequence<I>) -> Vec<i64> {
    let mut out = Vec::new();
    while seq.has_next() {
        out.push(seq.next().expect("has_next was true"));
    }
    out
}

// ============================================================================
// Construction & Exhaustion
// ============================================================================

#[test]
fn empty_source_has_no_next() {
    let seq = seq_of(&[]);
    assert!(!seq.has_next());
    assert_eq!(seq.peek(), None);
}

#[test]
fn next_on_exhausted_sequence_fails() {
    let mut seq = seq_of(&[]);
    assert_eq!(seq.next(), Err(SkipError::Exhausted));
}

#[test]
fn skip_on_exhausted_sequence_fails() {
    let mut seq = seq_of(&[1]);
    assert_eq!(seq.next(), Ok(1));
    assert_eq!(seq.skip(1), Err(SkipError::Exhausted));
}

#[test]
fn has_next_and_peek_have_no_side_effects() {
    let mut seq = seq_of(&[3, 4]);
    for _ in 0..5 {
        assert!(seq.has_next());
        assert_eq!(seq.peek(), Some(3));
    }
    assert_eq!(seq.next(), Ok(3));
}

#[test]
fn without_skips_reproduces_the_source() {
    let mut seq = seq_of(&[1, 2, 2, 3]);
    assert_eq!(drain(&mut seq), vec![1, 2, 2, 3]);
}

// ============================================================================
// Skip Semantics
// ============================================================================

#[test]
fn skipping_the_current_value_consumes_it_immediately() {
    let mut seq = seq_of(&[5, 6, 5]);
    seq.skip(5).expect("sequence not exhausted");
    // The leading 5 is gone; the later 5 is untouched.
    assert_eq!(drain(&mut seq), vec![6, 5]);
}

#[test]
fn repeated_skips_of_the_current_value_equal_single_next_calls() {
    let mut by_skip = seq_of(&[7, 8, 9]);
    let mut by_next = seq_of(&[7, 8, 9]);

    by_skip.skip(7).expect("not exhausted");
    by_next.next().expect("not exhausted");

    assert_eq!(by_skip.peek(), by_next.peek());
    assert_eq!(drain(&mut by_skip), drain(&mut by_next));
}

#[test]
fn skip_of_a_future_value_suppresses_only_its_next_occurrence() {
    let mut seq = seq_of(&[1, 2, 1, 1]);
    seq.skip(2).expect("not exhausted");
    assert_eq!(drain(&mut seq), vec![1, 1, 1]);
}

#[test_case(0, &[4, 4, 4] ; "no skips produce every occurrence")]
#[test_case(1, &[4, 4]    ; "one skip drops one occurrence")]
#[test_case(2, &[4]       ; "two skips drop two occurrences")]
#[test_case(3, &[]        ; "skips may cover every occurrence")]
#[test_case(5, &[]        ; "excess skips stay pending harmlessly")]
fn skip_count_suppresses_that_many_future_occurrences(k: u32, expected: &[i64]) {
    // 9 is the lookahead, so skips of 4 are all recorded as pending.
    let mut seq = seq_of(&[9, 4, 4, 4]);
    for _ in 0..k {
        seq.skip(4).expect("not exhausted");
    }
    assert_eq!(seq.next(), Ok(9));
    assert_eq!(drain(&mut seq), expected);
}

#[test]
fn suppressions_apply_in_source_order() {
    // Skip 6 twice up front: the first two 6s vanish, the third survives.
    let mut seq = seq_of(&[0, 6, 1, 6, 2, 6]);
    seq.skip(6).expect("not exhausted");
    seq.skip(6).expect("not exhausted");
    assert_eq!(drain(&mut seq), vec![0, 1, 2, 6]);
}

#[test]
fn skipping_a_value_that_never_appears_is_harmless() {
    let mut seq = seq_of(&[1, 2, 3]);
    seq.skip(42).expect("not exhausted");
    assert_eq!(seq.pending_skips(), 1);
    assert_eq!(drain(&mut seq), vec![1, 2, 3]);
}

#[test]
fn exhaustion_through_trailing_suppressed_values() {
    // After consuming 1, only suppressed 2s remain: the advance loop must
    // drain them and report exhaustion.
    let mut seq = seq_of(&[1, 2, 2]);
    seq.skip(2).expect("not exhausted");
    seq.skip(2).expect("not exhausted");
    assert_eq!(seq.next(), Ok(1));
    assert!(!seq.has_next());
    assert_eq!(seq.next(), Err(SkipError::Exhausted));
}

#[test]
fn works_over_an_unbounded_source() {
    let mut seq = SkipSequence::new(0i64..);
    seq.skip(1).expect("not exhausted");
    seq.skip(3).expect("not exhausted");
    assert_eq!(seq.next(), Ok(0));
    assert_eq!(seq.next(), Ok(2));
    assert_eq!(seq.next(), Ok(4));
    assert!(seq.has_next());
}

// ============================================================================
// Scripted Scenario
// ============================================================================

#[test]
fn scripted_scenario() {
    let mut it = seq_of(&[5, 6, 7, 5, 6, 8, 9, 5, 5, 6, 8]);
    assert!(it.has_next());
    assert_eq!(it.next(), Ok(5));
    it.skip(5).expect("not exhausted");
    assert_eq!(it.next(), Ok(6));
    assert_eq!(it.next(), Ok(7));
    it.skip(7).expect("not exhausted");
    it.skip(9).expect("not exhausted");
    assert_eq!(it.next(), Ok(6));
    assert_eq!(it.next(), Ok(8));
    assert_eq!(it.next(), Ok(5));
    it.skip(8).expect("not exhausted");
    it.skip(5).expect("not exhausted");
    assert!(it.has_next());
    assert_eq!(it.next(), Ok(6));
    assert!(!it.has_next());
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn no_skips_means_identity(source in prop::collection::vec(-20i64..20, 0..64)) {
            let mut seq = SkipSequence::new(source.clone().into_iter());
            prop_assert_eq!(drain(&mut seq), source);
        }

        /// Skipping `v` k times while it is not current removes exactly the
        /// first min(k, occurrences) occurrences of `v` from the output.
        #[test]
        fn pending_skips_remove_earliest_occurrences(
            source in prop::collection::vec(-5i64..5, 1..64),
            v in -5i64..5,
            k in 0usize..8,
        ) {
            prop_assume!(source[0] != v);

            let mut seq = SkipSequence::new(source.clone().into_iter());
            for _ in 0..k {
                seq.skip(v).expect("first element is current, not exhausted");
            }

            let mut remaining = k;
            let expected: Vec<i64> = source
                .iter()
                .copied()
                .filter(|&x| {
                    if x == v && remaining > 0 {
                        remaining -= 1;
                        false
                    } else {
                        true
                    }
                })
                .collect();

            prop_assert_eq!(drain(&mut seq), expected);
        }

        /// Skipping the current value is indistinguishable from consuming it.
        #[test]
        fn skipping_current_equals_next(
            source in prop::collection::vec(-20i64..20, 1..64),
        ) {
            let mut by_skip = SkipSequence::new(source.clone().into_iter());
            let mut by_next = SkipSequence::new(source.into_iter());

            let current = by_skip.peek().expect("source is non-empty");
            by_skip.skip(current).expect("not exhausted");
            by_next.next().expect("not exhausted");

            prop_assert_eq!(drain(&mut by_skip), drain(&mut by_next));
        }

        /// Whatever skips are issued up front, the output is a subsequence
        /// of the source.
        #[test]
        fn output_is_a_subsequence_of_the_source(
            source in prop::collection::vec(-5i64..5, 0..64),
            skips in prop::collection::vec(-5i64..5, 0..8),
        ) {
            let mut seq = SkipSequence::new(source.clone().into_iter());
            for v in skips {
                // Skips fail only once the sequence is exhausted.
                let _ = seq.skip(v);
            }

            let out = drain(&mut seq);
            let mut source_iter = source.iter();
            for value in &out {
                prop_assert!(
                    source_iter.any(|s| s == value),
                    "output {:?} is not a subsequence of {:?}",
                    out,
                    source,
                );
            }
        }
    }
}
