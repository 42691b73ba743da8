//! Top-down merge sort.
//!
//! ## Purpose
//!
//! Splits at `mid = (low + high) / 2`, sorts both halves, then merges them
//! through an auxiliary buffer, writing back into the range in position order.
//!
//! ## Design notes
//!
//! * **Events**: Each head-to-head comparison records `Compare(a, b)` with the
//!   source indices of both heads, followed by one placement. A placement is a
//!   `Swap` whose first half is the destination and the value written there,
//!   and whose second half is the source index with its current value.
//! * **Drains**: Once one run is exhausted the remaining values are placed
//!   without a comparison.
//! * **Buffer**: One `MergeBuffer` is reused for every merge of the run.
//!
//! ## Invariants
//!
//! * Stable: on ties the left head is taken first.
//! * The second half of a placement carries the value `src` already holds, so
//!   replaying it never changes state.

// Internal dependencies
use crate::primitives::buffer::MergeBuffer;
use crate::primitives::sequence::TracedSequence;

/// Sort `seq` ascending with stable merge sort.
pub fn merge_sort<T: PartialOrd + Clone>(seq: &mut TracedSequence<'_, T>) {
    let n = seq.len();
    if n < 2 {
        return;
    }

    let mut buffer = MergeBuffer::with_capacity(n);
    sort_range(seq, &mut buffer, 0, n - 1);
}

fn sort_range<T: PartialOrd + Clone>(
    seq: &mut TracedSequence<'_, T>,
    buffer: &mut MergeBuffer<T>,
    low: usize,
    high: usize,
) {
    if low >= high {
        return;
    }

    let mid = low + (high - low) / 2;
    sort_range(seq, buffer, low, mid);
    sort_range(seq, buffer, mid + 1, high);
    merge(seq, buffer, low, mid, high);
}

/// Merge the sorted runs `[low, mid]` and `[mid + 1, high]`.
pub fn merge<T: PartialOrd + Clone>(
    seq: &mut TracedSequence<'_, T>,
    buffer: &mut MergeBuffer<T>,
    low: usize,
    mid: usize,
    high: usize,
) {
    log::trace!("merging [{low}, {mid}] with [{}, {high}]", mid + 1);
    buffer.load(&seq.as_slice()[low..=high], low);

    let mut left = low;
    let mut right = mid + 1;
    let mut dest = low;

    while left <= mid && right <= high {
        seq.record_compare(left, right);
        if buffer.value(left) <= buffer.value(right) {
            seq.place(dest, buffer.value(left).clone(), left);
            left += 1;
        } else {
            seq.place(dest, buffer.value(right).clone(), right);
            right += 1;
        }
        dest += 1;
    }

    while left <= mid {
        seq.place(dest, buffer.value(left).clone(), left);
        left += 1;
        dest += 1;
    }

    while right <= high {
        seq.place(dest, buffer.value(right).clone(), right);
        right += 1;
        dest += 1;
    }
}
