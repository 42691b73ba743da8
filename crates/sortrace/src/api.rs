//! High-level API for trace-recording sorts.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for choosing the algorithm and run options, and hands off to
//! an execution adapter (Batch or Playback).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Configuration is validated when `.build()` is called on the adapter.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SortTraceBuilder`] via `SortTrace::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.return_stats()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.
//! 4. Call `.build()` and run it on a sequence.
//!
//! For one-off runs, [`run_sort`] does all of this with defaults.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::adapters::batch::{BatchSort, BatchSortBuilder};
use crate::adapters::playback::PlaybackSortBuilder;

// Publicly re-exported types
pub use crate::adapters::playback::{Frame, PlaybackSession, PlaybackSort};
pub use crate::algorithms::method::SortAlgorithm;
pub use crate::engine::output::SortResult;
pub use crate::evaluation::replay::{replay, ReplayStates};
pub use crate::evaluation::stats::TraceStats;
pub use crate::primitives::errors::SortError;
pub use crate::primitives::generator::SequenceGenerator;
pub use crate::primitives::trace::{Trace, TraceEvent};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Playback};
}

// ============================================================================
// Convenience Entry Point
// ============================================================================

/// Sort a copy of `sequence` with `algorithm` and return it with its trace.
///
/// Empty and single-element sequences return an empty trace.
pub fn run_sort<T: PartialOrd + Clone>(
    algorithm: SortAlgorithm,
    sequence: &[T],
) -> Result<(Vec<T>, Trace<T>), SortError> {
    let processor: BatchSort = BatchSortBuilder::default().algorithm(algorithm).build()?;
    processor.run(sequence).map(SortResult::into_parts)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring traced sorts and execution modes.
#[derive(Debug, Clone, Default)]
pub struct SortTraceBuilder {
    /// Algorithm to run.
    pub algorithm: Option<SortAlgorithm>,

    /// Maximum accepted sequence length.
    pub max_len: Option<usize>,

    /// Compute trace statistics (Batch only).
    pub return_stats: Option<bool>,

    /// Replay and check the trace after sorting (Batch only).
    pub verify_replay: Option<bool>,

    /// Keep every intermediate state (Playback only).
    pub record_states: Option<bool>,

    /// Initial cursor position (Playback only).
    pub start_at: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SortTraceBuilder {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SortAdapter,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sorting algorithm.
    pub fn algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Reject sequences longer than `max_len`.
    pub fn max_len(mut self, max_len: usize) -> Self {
        if self.max_len.is_some() {
            self.duplicate_param = Some("max_len");
        }
        self.max_len = Some(max_len);
        self
    }

    /// Compute trace statistics (Batch only).
    pub fn return_stats(mut self) -> Self {
        if self.return_stats.is_some() {
            self.duplicate_param = Some("return_stats");
        }
        self.return_stats = Some(true);
        self
    }

    /// Replay the trace after sorting and fail if it does not reproduce the output (Batch only).
    pub fn verify_replay(mut self) -> Self {
        if self.verify_replay.is_some() {
            self.duplicate_param = Some("verify_replay");
        }
        self.verify_replay = Some(true);
        self
    }

    /// Keep a snapshot of every intermediate state (Playback only).
    pub fn record_states(mut self) -> Self {
        if self.record_states.is_some() {
            self.duplicate_param = Some("record_states");
        }
        self.record_states = Some(true);
        self
    }

    /// Position the playback cursor at `step` after loading (Playback only).
    pub fn start_at(mut self, step: usize) -> Self {
        if self.start_at.is_some() {
            self.duplicate_param = Some("start_at");
        }
        self.start_at = Some(step);
        self
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Trait for transitioning from the generic builder to an execution builder.
pub trait SortAdapter {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`SortTraceBuilder`] into a specialized execution builder.
    fn convert(builder: SortTraceBuilder) -> Self::Output;
}

/// Marker for whole-run batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl SortAdapter for Batch {
    type Output = BatchSortBuilder;

    fn convert(builder: SortTraceBuilder) -> Self::Output {
        let mut result = BatchSortBuilder::default();

        if let Some(algorithm) = builder.algorithm {
            result.algorithm = algorithm;
        }
        result.max_len = builder.max_len;
        if let Some(rs) = builder.return_stats {
            result.return_stats = rs;
        }
        if let Some(vr) = builder.verify_replay {
            result.verify_replay = vr;
        }

        if builder.record_states.is_some() {
            result.deferred_error = Some(SortError::UnsupportedFeature {
                adapter: "Batch",
                feature: "record_states",
            });
        } else if builder.start_at.is_some() {
            result.deferred_error = Some(SortError::UnsupportedFeature {
                adapter: "Batch",
                feature: "start_at",
            });
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for step-wise playback.
#[derive(Debug, Clone, Copy)]
pub struct Playback;

impl SortAdapter for Playback {
    type Output = PlaybackSortBuilder;

    fn convert(builder: SortTraceBuilder) -> Self::Output {
        let mut result = PlaybackSortBuilder::default();

        if let Some(algorithm) = builder.algorithm {
            result.algorithm = algorithm;
        }
        result.max_len = builder.max_len;
        if let Some(rs) = builder.record_states {
            result.record_states = rs;
        }
        result.start_at = builder.start_at;

        // Sessions always expose stats and validate their trace at load.
        if builder.verify_replay.is_some() {
            result.deferred_error = Some(SortError::UnsupportedFeature {
                adapter: "Playback",
                feature: "verify_replay",
            });
        } else if builder.return_stats.is_some() {
            result.deferred_error = Some(SortError::UnsupportedFeature {
                adapter: "Playback",
                feature: "return_stats",
            });
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
