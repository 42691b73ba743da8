//! Trace events and the trace container.
//!
//! ## Purpose
//!
//! This module defines the in-memory protocol between a sort run and the
//! renderer that plays it back: a flat, ordered list of tagged events.
//!
//! ## Design notes
//!
//! * **Tagged**: Every event states its kind; nothing is inferred from position.
//! * **Post-swap values**: `Swap` carries the values now occupying both indices,
//!   so playback can assign them without re-running any comparison.
//! * **Append-only**: Only the crate appends; callers get read access.
//!
//! ## Key concepts
//!
//! * **Compare**: Two indices are examined, nothing moves.
//! * **Swap**: Two indices are updated to the carried values.
//! * **NoOp**: A comparison found the pair already in order.
//!
//! ## Invariants
//!
//! * Every `Compare` is immediately followed by a `Swap` or a `NoOp`.
//! * Replaying all `Swap` events over the input yields the sorted output.
//!
//! ## Non-goals
//!
//! * This module does not define a wire or file format.
//! * This module does not apply events (see `evaluation::replay`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::ops::Index;
use core::slice::Iter;

// ============================================================================
// Trace Event
// ============================================================================

/// One recorded operation of a sort run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TraceEvent<T> {
    /// Indices `i` and `j` are being compared.
    Compare {
        /// Left index.
        i: usize,
        /// Right index.
        j: usize,
    },

    /// Indices `i` and `j` now hold `value_i` and `value_j`.
    Swap {
        /// First index.
        i: usize,
        /// Value moved into `i`.
        value_i: T,
        /// Second index.
        j: usize,
        /// Value moved into `j`.
        value_j: T,
    },

    /// The preceding comparison required no exchange.
    NoOp,
}

impl<T> TraceEvent<T> {
    /// Returns `true` for `Compare` events.
    #[inline]
    pub fn is_compare(&self) -> bool {
        matches!(self, Self::Compare { .. })
    }

    /// Returns `true` for `Swap` events.
    #[inline]
    pub fn is_swap(&self) -> bool {
        matches!(self, Self::Swap { .. })
    }

    /// Returns `true` for `NoOp` events.
    #[inline]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// Returns `true` if this resolves a preceding `Compare`.
    #[inline]
    pub fn is_resolution(&self) -> bool {
        !self.is_compare()
    }

    /// Indices touched by this event, if any.
    pub fn indices(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Compare { i, j } | Self::Swap { i, j, .. } => Some((i, j)),
            Self::NoOp => None,
        }
    }
}

impl<T: Display> Display for TraceEvent<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Compare { i, j } => write!(f, "Compare({i}, {j})"),
            Self::Swap {
                i,
                value_i,
                j,
                value_j,
            } => write!(f, "Swap({i} <- {value_i}, {j} <- {value_j})"),
            Self::NoOp => write!(f, "NoOp"),
        }
    }
}

// ============================================================================
// Trace
// ============================================================================

/// Ordered, replayable log of a single sort run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<T> {
    events: Vec<TraceEvent<T>>,
}

impl<T> Default for Trace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Trace<T> {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Create an empty trace with room for `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    /// Append an event. Only sort runs record events.
    #[inline]
    pub(crate) fn push(&mut self, event: TraceEvent<T>) {
        self.events.push(event);
    }

    /// Number of recorded events.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over the events in recording order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, TraceEvent<T>> {
        self.events.iter()
    }

    /// View the events as a slice.
    #[inline]
    pub fn events(&self) -> &[TraceEvent<T>] {
        &self.events
    }

    /// Event at `step`, if any.
    #[inline]
    pub fn get(&self, step: usize) -> Option<&TraceEvent<T>> {
        self.events.get(step)
    }

    /// Number of `Compare` events.
    pub fn comparisons(&self) -> usize {
        self.events.iter().filter(|e| e.is_compare()).count()
    }

    /// Number of `Swap` events.
    pub fn swaps(&self) -> usize {
        self.events.iter().filter(|e| e.is_swap()).count()
    }

    /// Consume the trace and return the raw events.
    pub fn into_events(self) -> Vec<TraceEvent<T>> {
        self.events
    }
}

impl<T> From<Vec<TraceEvent<T>>> for Trace<T> {
    /// Wrap externally produced events, e.g. a trace received from elsewhere.
    ///
    /// Such traces are not trusted; validate them before replaying.
    fn from(events: Vec<TraceEvent<T>>) -> Self {
        Self { events }
    }
}

impl<T> Index<usize> for Trace<T> {
    type Output = TraceEvent<T>;

    #[inline]
    fn index(&self, step: usize) -> &Self::Output {
        &self.events[step]
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a TraceEvent<T>;
    type IntoIter = Iter<'a, TraceEvent<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl<T> IntoIterator for Trace<T> {
    type Item = TraceEvent<T>;
    type IntoIter = <Vec<TraceEvent<T>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
