//! Execution engine for trace-recording sorts.
//!
//! ## Purpose
//!
//! This module dispatches a run to the selected algorithm, wraps the working
//! data in a `TracedSequence`, and hands back the finished trace. It is the
//! single entry point the adapters use.
//!
//! ## Design notes
//!
//! * Provides both an in-place entry point and a copying one.
//! * Pre-sizes the trace from the algorithm's expected step count.
//! * Logs run start and completion through the `log` facade.
//! * Generic over any `PartialOrd + Clone` element type.
//!
//! ## Invariants
//!
//! * Sequences of length 0 or 1 produce an empty trace and are left unchanged.
//! * Each run owns its trace; nothing is shared between runs.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not compute statistics or verify replays (handled by adapters).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::bubble::bubble_sort;
use crate::algorithms::insertion::insertion_sort;
use crate::algorithms::merge::merge_sort;
use crate::algorithms::method::SortAlgorithm;
use crate::algorithms::quick::quick_sort;
use crate::primitives::sequence::TracedSequence;
use crate::primitives::trace::Trace;

// ============================================================================
// Output
// ============================================================================

/// Output from a copying run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// The sorted working copy.
    pub sorted: Vec<T>,

    /// Everything the algorithm did, in order.
    pub trace: Trace<T>,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for trace-recording sorts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortExecutor {
    /// Algorithm to run.
    pub algorithm: SortAlgorithm,
}

impl SortExecutor {
    /// Create an executor for `algorithm`.
    pub fn new(algorithm: SortAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Sort a copy of `input` and return it together with the trace.
    pub fn run<T: PartialOrd + Clone>(&self, input: &[T]) -> ExecutorOutput<T> {
        let mut sorted = input.to_vec();
        let trace = self.run_in_place(&mut sorted);
        ExecutorOutput { sorted, trace }
    }

    /// Sort `data` in place and return the trace.
    pub fn run_in_place<T: PartialOrd + Clone>(&self, data: &mut [T]) -> Trace<T> {
        let n = data.len();
        log::debug!("{} started on {} elements", self.algorithm, n);

        let capacity = Self::estimated_steps(self.algorithm, n);
        let mut seq = TracedSequence::with_capacity(data, capacity);
        match self.algorithm {
            SortAlgorithm::Bubble => bubble_sort(&mut seq),
            SortAlgorithm::Quick => quick_sort(&mut seq),
            SortAlgorithm::Merge => merge_sort(&mut seq),
            SortAlgorithm::Insertion => insertion_sort(&mut seq),
        }
        let trace = seq.finish();

        log::debug!(
            "{} finished: {} events ({} comparisons)",
            self.algorithm,
            trace.len(),
            trace.comparisons()
        );
        trace
    }

    /// Expected number of events for `n` elements, used to pre-size the trace.
    ///
    /// Exact for bubble sort; an `n log n` estimate for the others.
    pub fn estimated_steps(algorithm: SortAlgorithm, n: usize) -> usize {
        if n < 2 {
            return 0;
        }
        match algorithm {
            SortAlgorithm::Bubble => n * (n - 1),
            SortAlgorithm::Quick | SortAlgorithm::Merge | SortAlgorithm::Insertion => {
                let log2 = (usize::BITS - n.leading_zeros()) as usize;
                2 * n * log2
            }
        }
    }
}
