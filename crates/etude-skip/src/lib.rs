//! # etude-skip: skip-aware sequence wrapper
//!
//! Wraps an ordered, forward-only source of integers and adds the ability
//! to mark a value to be skipped the next time(s) it would otherwise be
//! produced.
//!
//! ## Key Principles
//!
//! - **No IO**: the wrapper only pulls from the iterator it was given
//! - **Forward-only**: the source is consumed once and never restarted
//! - **Eager lookahead**: the next value is computed ahead of time, so
//!   [`SkipSequence::has_next`] is O(1) and side-effect free
//!
//! ## Example
//!
//! ```
//! use etude_skip::SkipSequence;
//!
//! let mut seq = SkipSequence::new([5, 6, 7, 5].into_iter());
//! assert_eq!(seq.next().unwrap(), 5);
//! seq.skip(5).unwrap(); // suppress the next 5
//! assert_eq!(seq.next().unwrap(), 6);
//! assert_eq!(seq.next().unwrap(), 7);
//! assert!(!seq.has_next()); // the trailing 5 was suppressed
//! ```

pub mod seq;

#[cfg(test)]
mod tests;

pub use seq::{SkipError, SkipSequence};
