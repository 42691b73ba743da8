//! Output types for trace-recording sort runs.
//!
//! ## Purpose
//!
//! This module defines `SortResult`, which bundles the input, the sorted
//! output, the recorded trace, and the optional statistics of one run.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Statistics are only stored when requested.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `input` and `sorted` have the same length.
//! * Replaying `trace` over `input` yields `sorted`.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting or replay; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::method::SortAlgorithm;
use crate::evaluation::replay::ReplayStates;
use crate::evaluation::stats::TraceStats;
use crate::primitives::trace::Trace;

// Rows shown at each end of the trace table before eliding the middle.
const EDGE_ROWS: usize = 10;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a single traced sort.
#[derive(Debug, Clone, PartialEq)]
pub struct SortResult<T> {
    /// Algorithm that produced the trace.
    pub algorithm: SortAlgorithm,

    /// Copy of the sequence as given.
    pub input: Vec<T>,

    /// Sorted sequence.
    pub sorted: Vec<T>,

    /// Events recorded while sorting.
    pub trace: Trace<T>,

    /// Operation counts (only when requested).
    pub stats: Option<TraceStats>,

    /// Whether the trace was replayed and checked against `sorted`.
    pub replay_verified: bool,
}

impl<T> SortResult<T> {
    /// Number of elements sorted.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Whether the input was empty.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Number of recorded events.
    pub fn steps(&self) -> usize {
        self.trace.len()
    }

    /// Check if statistics were computed.
    pub fn has_stats(&self) -> bool {
        self.stats.is_some()
    }

    /// Split into the sorted sequence and its trace.
    pub fn into_parts(self) -> (Vec<T>, Trace<T>) {
        (self.sorted, self.trace)
    }
}

impl<T: Clone> SortResult<T> {
    /// Iterate over the state after each event, starting from `input`.
    pub fn states(&self) -> ReplayStates<'_, T> {
        ReplayStates::new(&self.input, &self.trace)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

fn write_values<T: Display>(f: &mut Formatter<'_>, values: &[T]) -> Result {
    let n = values.len();
    write!(f, "[")?;
    for (k, value) in values.iter().enumerate() {
        if n > 2 * EDGE_ROWS && k == EDGE_ROWS {
            write!(f, ", ...")?;
        }
        if n > 2 * EDGE_ROWS && k >= EDGE_ROWS && k < n - EDGE_ROWS {
            continue;
        }
        if k > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    write!(f, "]")
}

impl<T: Display> Display for SortResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm:   {}", self.algorithm)?;
        writeln!(f, "  Elements:    {}", self.sorted.len())?;
        writeln!(f, "  Steps:       {}", self.trace.len())?;
        if self.replay_verified {
            writeln!(f, "  Replay:      Verified")?;
        }
        write!(f, "  Input:       ")?;
        write_values(f, &self.input)?;
        writeln!(f)?;
        write!(f, "  Sorted:      ")?;
        write_values(f, &self.sorted)?;
        writeln!(f)?;
        writeln!(f)?;

        if let Some(stats) = &self.stats {
            writeln!(f, "{}", stats)?;
            writeln!(f)?;
        }

        writeln!(f, "Trace:")?;
        writeln!(f, "{:>8}  {}", "Step", "Event")?;
        writeln!(f, "{:-<40}", "")?;

        // Show first 10 and last 10 events if more than 20
        let n = self.trace.len();
        let rows: Vec<usize> = if n <= 2 * EDGE_ROWS {
            (0..n).collect()
        } else {
            (0..EDGE_ROWS).chain(n - EDGE_ROWS..n).collect()
        };

        let mut prev = 0;
        for (k, &step) in rows.iter().enumerate() {
            if k > 0 && step != prev + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev = step;
            writeln!(f, "{:>8}  {}", step, self.trace[step])?;
        }

        Ok(())
    }
}
