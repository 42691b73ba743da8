//! Quick sort with Lomuto partitioning.
//!
//! ## Purpose
//!
//! Quick sort using the last element of each subrange as pivot and a single
//! boundary index.
//!
//! ## Design notes
//!
//! * **Explicit stack**: Subranges are kept on a work stack instead of the call
//!   stack, so already-sorted input cannot overflow it. The right range is
//!   pushed before the left one, which keeps the visiting order identical to
//!   left-then-right recursion.
//! * **Pivot placement**: The final `i + 1 <-> high` exchange is always recorded,
//!   including self-swaps, so every partition ends with a placement step.
//!
//! ## Invariants
//!
//! * Elements strictly less than the pivot end up left of it.
//! * Only ranges with `low < high` are partitioned.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::sequence::TracedSequence;

/// Sort `seq` ascending with Lomuto quick sort.
pub fn quick_sort<T: PartialOrd + Clone>(seq: &mut TracedSequence<'_, T>) {
    let n = seq.len();
    if n < 2 {
        return;
    }

    let mut pending: Vec<(usize, usize)> = Vec::new();
    pending.push((0, n - 1));

    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }

        let pivot = partition(seq, low, high);
        log::trace!("partitioned [{low}, {high}] around index {pivot}");

        // Popped in reverse: the left range is finished before the right one starts.
        if pivot < high {
            pending.push((pivot + 1, high));
        }
        if pivot > low {
            pending.push((low, pivot - 1));
        }
    }
}

/// Partition `[low, high]` around `seq[high]` and return the pivot's final index.
pub fn partition<T: PartialOrd + Clone>(
    seq: &mut TracedSequence<'_, T>,
    low: usize,
    high: usize,
) -> usize {
    // Next slot for an element smaller than the pivot (Lomuto's `i + 1`).
    let mut boundary = low;

    for j in low..high {
        if seq.compare_lt(j, high) {
            seq.swap(boundary, j);
            boundary += 1;
        } else {
            seq.noop();
        }
    }

    seq.swap(boundary, high);
    boundary
}
