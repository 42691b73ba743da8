//! Working sequence that records every operation into a trace.
//!
//! ## Purpose
//!
//! This module provides `TracedSequence`, the only way algorithms touch the
//! data they sort. Each comparison, exchange, and merge placement goes through
//! it, so the trace cannot drift from what actually happened to the data.
//!
//! ## Design notes
//!
//! * **Borrowing**: Wraps a mutable slice; the caller keeps ownership.
//! * **Single recorder**: One trace per run, handed back by `finish`.
//! * **Ordering**: Uses `PartialOrd` operators exactly (`>` and `<`); ties never swap.
//!
//! ## Key concepts
//!
//! * **compare_gt / compare_lt**: Record `Compare(i, j)` and return the outcome.
//! * **swap / noop**: Resolve the preceding comparison.
//! * **place**: Merge write-back, recorded in `Swap` shape (destination plus source).
//!
//! ## Invariants
//!
//! * `Swap` events always carry the values present after the operation.
//! * Indices passed in are in bounds (algorithms guarantee this).
//!
//! ## Non-goals
//!
//! * This module does not choose when to compare; algorithms do.
//! * This module does not validate element comparability.

// Internal dependencies
use crate::primitives::trace::{Trace, TraceEvent};

// ============================================================================
// Traced Sequence
// ============================================================================

/// A mutable slice paired with the trace of everything done to it.
#[derive(Debug)]
pub struct TracedSequence<'a, T> {
    data: &'a mut [T],
    trace: Trace<T>,
}

impl<'a, T: PartialOrd + Clone> TracedSequence<'a, T> {
    /// Wrap `data` with an empty trace.
    pub fn new(data: &'a mut [T]) -> Self {
        Self {
            data,
            trace: Trace::new(),
        }
    }

    /// Wrap `data` and reserve room for `capacity` events.
    pub fn with_capacity(data: &'a mut [T], capacity: usize) -> Self {
        Self {
            data,
            trace: Trace::with_capacity(capacity),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current contents.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data
    }

    /// Current value at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        &self.data[index]
    }

    /// Events recorded so far.
    #[inline]
    pub fn trace(&self) -> &Trace<T> {
        &self.trace
    }

    // ========================================================================
    // Comparisons
    // ========================================================================

    /// Record `Compare(i, j)` without inspecting values.
    ///
    /// Used when the compared values live outside the sequence (merge heads).
    #[inline]
    pub fn record_compare(&mut self, i: usize, j: usize) {
        self.trace.push(TraceEvent::Compare { i, j });
    }

    /// Record `Compare(i, j)` and return `data[i] > data[j]`.
    #[inline]
    pub fn compare_gt(&mut self, i: usize, j: usize) -> bool {
        self.record_compare(i, j);
        self.data[i] > self.data[j]
    }

    /// Record `Compare(i, j)` and return `data[i] < data[j]`.
    #[inline]
    pub fn compare_lt(&mut self, i: usize, j: usize) -> bool {
        self.record_compare(i, j);
        self.data[i] < self.data[j]
    }

    // ========================================================================
    // Resolutions
    // ========================================================================

    /// Exchange `i` and `j` and record the post-swap values.
    ///
    /// A self-swap (`i == j`) is still recorded.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
        self.trace.push(TraceEvent::Swap {
            i,
            value_i: self.data[i].clone(),
            j,
            value_j: self.data[j].clone(),
        });
    }

    /// Record that the preceding comparison needed no exchange.
    #[inline]
    pub fn noop(&mut self) {
        self.trace.push(TraceEvent::NoOp);
    }

    /// Write `value` to `dest` and record it in `Swap` shape.
    ///
    /// The second half of the event is `src` with the value it holds after the
    /// write, so replay assigns it unchanged.
    #[inline]
    pub fn place(&mut self, dest: usize, value: T, src: usize) {
        self.data[dest] = value;
        self.trace.push(TraceEvent::Swap {
            i: dest,
            value_i: self.data[dest].clone(),
            j: src,
            value_j: self.data[src].clone(),
        });
    }

    /// Release the slice and return the recorded trace.
    pub fn finish(self) -> Trace<T> {
        self.trace
    }
}
