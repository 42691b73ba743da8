//! Insertion sort by adjacent swaps.
//!
//! Each new element walks left one exchange at a time until its left
//! neighbour is not greater. The stopping comparison is resolved with `NoOp`;
//! reaching index 0 stops without a further comparison.

// Internal dependencies
use crate::primitives::sequence::TracedSequence;

/// Sort `seq` ascending with stable insertion sort.
pub fn insertion_sort<T: PartialOrd + Clone>(seq: &mut TracedSequence<'_, T>) {
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 {
            if seq.compare_gt(j - 1, j) {
                seq.swap(j - 1, j);
                j -= 1;
            } else {
                seq.noop();
                break;
            }
        }
    }
}
