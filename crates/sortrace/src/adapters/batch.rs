//! Batch adapter for trace-recording sorts.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: validate the input, sort
//! a working copy (or the caller's slice) in one pass, and hand back the
//! sorted output together with its trace.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire sequence in a single pass.
//! * **Delegation**: Delegates sorting to the execution engine.
//! * **Verification**: Optionally replays the trace and checks it against the output.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Copying vs in-place**: `run` leaves the input untouched; `sort_in_place`
//!   mutates the caller's slice and returns only the trace.
//!
//! ## Invariants
//!
//! * Every element must be comparable with itself.
//! * The returned trace satisfies the compare/resolve pairing.
//!
//! ## Non-goals
//!
//! * This adapter does not step through traces (use the playback adapter).
//! * This adapter does not pace or render anything.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::method::SortAlgorithm;
use crate::engine::executor::SortExecutor;
use crate::engine::output::SortResult;
use crate::engine::validator::Validator;
use crate::evaluation::replay::replay;
use crate::evaluation::stats::TraceStats;
use crate::primitives::errors::SortError;
use crate::primitives::trace::Trace;

// ============================================================================
// Batch Sort Builder
// ============================================================================

/// Builder for the batch sort processor.
#[derive(Debug, Clone)]
pub struct BatchSortBuilder {
    /// Algorithm to run.
    pub algorithm: SortAlgorithm,

    /// Maximum accepted sequence length.
    pub max_len: Option<usize>,

    /// Compute trace statistics.
    pub return_stats: bool,

    /// Replay the trace and check it reproduces the sorted output.
    pub verify_replay: bool,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<SortError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for BatchSortBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchSortBuilder {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            algorithm: SortAlgorithm::default(),
            max_len: None,
            return_stats: false,
            verify_replay: false,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the algorithm.
    pub fn algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Reject inputs longer than `max_len`.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Enable trace statistics in the result.
    pub fn return_stats(mut self) -> Self {
        self.return_stats = true;
        self
    }

    /// Enable replay verification.
    pub fn verify_replay(mut self) -> Self {
        self.verify_replay = true;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchSort, SortError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(BatchSort { config: self })
    }
}

// ============================================================================
// Batch Sort Processor
// ============================================================================

/// Batch sort processor.
#[derive(Debug, Clone)]
pub struct BatchSort {
    config: BatchSortBuilder,
}

impl BatchSort {
    /// Algorithm this processor runs.
    pub fn algorithm(&self) -> SortAlgorithm {
        self.config.algorithm
    }

    /// Sort a copy of `input` and record the trace.
    pub fn run<T: PartialOrd + Clone>(&self, input: &[T]) -> Result<SortResult<T>, SortError> {
        self.validate(input)?;

        let output = SortExecutor::new(self.config.algorithm).run(input);

        if self.config.verify_replay {
            self.verify(input, &output.sorted, &output.trace)?;
        }

        let stats = if self.config.return_stats {
            Some(TraceStats::compute(&output.trace, input.len()))
        } else {
            None
        };

        Ok(SortResult {
            algorithm: self.config.algorithm,
            input: input.to_vec(),
            sorted: output.sorted,
            trace: output.trace,
            stats,
            replay_verified: self.config.verify_replay,
        })
    }

    /// Sort `data` in place and return the trace.
    pub fn sort_in_place<T: PartialOrd + Clone>(
        &self,
        data: &mut [T],
    ) -> Result<Trace<T>, SortError> {
        self.validate(data)?;

        let initial: Option<Vec<T>> = self.config.verify_replay.then(|| data.to_vec());
        let trace = SortExecutor::new(self.config.algorithm).run_in_place(data);

        if let Some(initial) = initial {
            self.verify(&initial, data, &trace)?;
        }

        Ok(trace)
    }

    fn validate<T: PartialOrd>(&self, input: &[T]) -> Result<(), SortError> {
        Validator::validate_len(input.len(), self.config.max_len)?;
        Validator::validate_sequence(input)
    }

    fn verify<T: PartialOrd + Clone>(
        &self,
        initial: &[T],
        sorted: &[T],
        trace: &Trace<T>,
    ) -> Result<(), SortError> {
        let checked = Validator::validate_trace(trace, initial.len())
            .and_then(|()| replay(initial, trace))
            .and_then(|replayed| Validator::validate_replay(&replayed, sorted));

        if let Err(err) = &checked {
            log::warn!("{} trace failed verification: {}", self.config.algorithm, err);
        }
        checked
    }
}
