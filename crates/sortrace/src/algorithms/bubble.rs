//! Bubble sort.
//!
//! ## Purpose
//!
//! Classic adjacent-pair bubble sort: `n - 1` passes, each pass one shorter
//! than the last because the tail is already settled.
//!
//! ## Invariants
//!
//! * Exactly `n(n-1)/2` comparisons for any input of length `n`; there is no
//!   early exit on an already-sorted pass.
//! * Equal neighbours are never exchanged.

// Internal dependencies
use crate::primitives::sequence::TracedSequence;

/// Number of comparisons bubble sort performs on `n` elements.
#[inline]
pub fn comparison_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Sort `seq` ascending, recording `Compare` then `Swap`/`NoOp` for every pair.
pub fn bubble_sort<T: PartialOrd + Clone>(seq: &mut TracedSequence<'_, T>) {
    let n = seq.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if seq.compare_gt(j, j + 1) {
                seq.swap(j, j + 1);
            } else {
                seq.noop();
            }
        }
    }
}
