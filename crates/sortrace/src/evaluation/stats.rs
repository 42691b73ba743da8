//! Summary statistics for recorded traces.
//!
//! ## Purpose
//!
//! This module counts what a run did: comparisons, exchanges, placements that
//! moved nothing, and steps that needed no exchange. Front ends show these
//! next to the animation; tests use them to pin algorithm behaviour.
//!
//! ## Key concepts
//!
//! * **Steps**: Total number of events (one animation frame each).
//! * **Self-swaps**: `Swap` events with `i == j`, e.g. a pivot already in place.
//! * **Swap ratio**: Swaps per comparison.
//!
//! ## Invariants
//!
//! * `steps == comparisons + swaps + no_ops`.
//! * `self_swaps <= swaps`.
//!
//! ## Non-goals
//!
//! * This module does not measure wall-clock time.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::trace::{Trace, TraceEvent};

// ============================================================================
// Trace Statistics
// ============================================================================

/// Operation counts for one trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceStats {
    /// Length of the sorted sequence.
    pub elements: usize,

    /// Total number of events.
    pub steps: usize,

    /// Number of `Compare` events.
    pub comparisons: usize,

    /// Number of `Swap` events, including self-swaps.
    pub swaps: usize,

    /// Number of `Swap` events with identical indices.
    pub self_swaps: usize,

    /// Number of `NoOp` events.
    pub no_ops: usize,
}

impl TraceStats {
    /// Count the events of `trace` recorded over `elements` values.
    pub fn compute<T>(trace: &Trace<T>, elements: usize) -> Self {
        let mut stats = Self {
            elements,
            steps: trace.len(),
            ..Self::default()
        };

        for event in trace {
            match event {
                TraceEvent::Compare { .. } => stats.comparisons += 1,
                TraceEvent::Swap { i, j, .. } => {
                    stats.swaps += 1;
                    if i == j {
                        stats.self_swaps += 1;
                    }
                }
                TraceEvent::NoOp => stats.no_ops += 1,
            }
        }

        stats
    }

    /// Swaps per comparison, or 0 when nothing was compared.
    pub fn swap_ratio(&self) -> f64 {
        if self.comparisons == 0 {
            0.0
        } else {
            self.swaps as f64 / self.comparisons as f64
        }
    }

    /// Swaps that actually exchanged two different slots.
    pub fn effective_swaps(&self) -> usize {
        self.swaps - self.self_swaps
    }
}

impl Display for TraceStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Trace Statistics:")?;
        writeln!(f, "  Elements:     {}", self.elements)?;
        writeln!(f, "  Steps:        {}", self.steps)?;
        writeln!(f, "  Comparisons:  {}", self.comparisons)?;
        writeln!(f, "  Swaps:        {}", self.swaps)?;
        writeln!(f, "  Self-swaps:   {}", self.self_swaps)?;
        writeln!(f, "  No-ops:       {}", self.no_ops)?;
        write!(f, "  Swap ratio:   {:.4}", self.swap_ratio())
    }
}
