//! The skip-aware sequence itself.
//!
//! `SkipSequence` keeps a one-element lookahead over the source plus a
//! counting map of values whose future occurrences should be suppressed.
//! The advance loop consumes suppressed values internally, so the lookahead
//! is always a value the caller is actually going to receive.

use std::collections::BTreeMap;

/// Errors produced by [`SkipSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SkipError {
    /// The underlying source has no more values to produce.
    #[error("sequence exhausted")]
    Exhausted,
}

/// A forward-only integer sequence with per-value skip marks.
///
/// Wraps any `Iterator<Item = i64>`, finite or infinite. Calling
/// [`skip`](Self::skip) on a value that is not the current lookahead records
/// a suppression to be applied against the *next* future occurrence of that
/// value; skipping the current lookahead consumes it immediately.
///
/// Invariant: when the lookahead is present, it is never a value that had a
/// positive suppression count at the moment it was selected - any such value
/// was consumed internally and its count decremented.
#[derive(Debug, Clone)]
pub struct SkipSequence<I: Iterator<Item = i64>> {
    source: I,
    /// Value -> count of future occurrences to suppress. Counts are always
    /// positive; an entry is removed the moment its count reaches zero.
    pending: BTreeMap<i64, u32>,
    lookahead: Option<i64>,
}

impl<I: Iterator<Item = i64>> SkipSequence<I> {
    /// Wraps `source` and eagerly computes the first lookahead value.
    pub fn new(source: I) -> Self {
        let mut seq = Self {
            source,
            pending: BTreeMap::new(),
            lookahead: None,
        };
        seq.advance();
        seq
    }

    /// Returns true iff a next value is available. No side effects.
    pub fn has_next(&self) -> bool {
        self.lookahead.is_some()
    }

    /// Returns the lookahead without consuming it, or `None` when exhausted.
    pub fn peek(&self) -> Option<i64> {
        self.lookahead
    }

    /// Returns the number of distinct values with outstanding suppressions.
    pub fn pending_skips(&self) -> usize {
        self.pending.len()
    }

    /// Produces the next non-suppressed value.
    ///
    /// # Errors
    ///
    /// Returns [`SkipError::Exhausted`] when the source has no values left.
    pub fn next(&mut self) -> Result<i64, SkipError> {
        let value = self.lookahead.ok_or(SkipError::Exhausted)?;
        self.advance();
        Ok(value)
    }

    /// Marks one occurrence of `value` to be skipped.
    ///
    /// If `value` is the current lookahead, this call consumes the upcoming
    /// occurrence itself. Otherwise the suppression applies to the next
    /// future occurrence of `value` in source order; skipping a value `k`
    /// times suppresses its next `k` occurrences, first-suppressed-first.
    ///
    /// # Errors
    ///
    /// Returns [`SkipError::Exhausted`] when the sequence is exhausted,
    /// mirroring [`next`](Self::next).
    pub fn skip(&mut self, value: i64) -> Result<(), SkipError> {
        if !self.has_next() {
            return Err(SkipError::Exhausted);
        }

        if self.lookahead == Some(value) {
            self.advance();
        } else {
            *self.pending.entry(value).or_insert(0) += 1;
        }
        Ok(())
    }

    /// Pulls from the source until a non-suppressed value is found (the new
    /// lookahead) or the source is exhausted (lookahead becomes `None`).
    fn advance(&mut self) {
        self.lookahead = None;
        for value in self.source.by_ref() {
            match self.pending.get_mut(&value) {
                None => {
                    self.lookahead = Some(value);
                    break;
                }
                Some(count) => {
                    *count -= 1;
                    if *count == 0 {
                        self.pending.remove(&value);
                    }
                }
            }
        }

        // Invariant: a selected lookahead carries no suppression count.
        debug_assert!(
            self.lookahead
                .is_none_or(|v| !self.pending.contains_key(&v)),
        );
    }
}
