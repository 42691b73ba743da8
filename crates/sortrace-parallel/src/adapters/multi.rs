//! One algorithm over many inputs.
//!
//! ## Purpose
//!
//! This module sorts a batch of independent sequences with the same
//! algorithm and options, e.g. to precompute traces for a gallery of
//! generated inputs.
//!
//! ## Design notes
//!
//! * **Parallelism**: Each input runs as an independent rayon task (`cpu` feature).
//! * **Fail-fast**: Every input is checked (contiguity, length, comparability)
//!   before any sorting starts; the first failing input in order is reported.
//!
//! ## Invariants
//!
//! * `results[k]` belongs to `inputs[k]`.

// Export dependencies from sortrace crate
use sortrace::internals::adapters::batch::BatchSort;
use sortrace::internals::algorithms::method::SortAlgorithm;
use sortrace::internals::engine::output::SortResult;
use sortrace::internals::engine::validator::Validator;
use sortrace::internals::primitives::errors::SortError;

// Internal dependencies
#[cfg(feature = "cpu")]
use crate::engine::executor::run_inputs_parallel;
use crate::engine::executor::{run_inputs_sequential, RunOptions};
use crate::input::SortInput;

// ============================================================================
// Multi Sort Builder
// ============================================================================

/// Builder for sorting many inputs with one algorithm.
#[derive(Debug, Clone)]
pub struct MultiSortBuilder {
    /// Algorithm to run.
    pub algorithm: Option<SortAlgorithm>,

    /// Options applied to every run.
    pub options: RunOptions,

    /// Run inputs on the rayon thread pool.
    pub parallel: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for MultiSortBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiSortBuilder {
    /// Create a builder with default options (bubble sort, parallel).
    pub fn new() -> Self {
        Self {
            algorithm: None,
            options: RunOptions::default(),
            parallel: true,
            duplicate_param: None,
        }
    }

    /// Set the algorithm.
    pub fn algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Reject inputs longer than `max_len`.
    pub fn max_len(mut self, max_len: usize) -> Self {
        if self.options.max_len.is_some() {
            self.duplicate_param = Some("max_len");
        }
        self.options.max_len = Some(max_len);
        self
    }

    /// Compute trace statistics for every run.
    pub fn return_stats(mut self) -> Self {
        if self.options.return_stats {
            self.duplicate_param = Some("return_stats");
        }
        self.options.return_stats = true;
        self
    }

    /// Replay and check every trace.
    pub fn verify_replay(mut self) -> Self {
        if self.options.verify_replay {
            self.duplicate_param = Some("verify_replay");
        }
        self.options.verify_replay = true;
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the processor.
    pub fn build(self) -> Result<MultiSort, SortError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let processor = self
            .options
            .processor(self.algorithm.unwrap_or_default())?;

        Ok(MultiSort {
            processor,
            max_len: self.options.max_len,
            parallel: self.parallel,
        })
    }
}

// ============================================================================
// Multi Sort Processor
// ============================================================================

/// Sorts many inputs with one configured algorithm.
#[derive(Debug, Clone)]
pub struct MultiSort {
    processor: BatchSort,
    max_len: Option<usize>,
    parallel: bool,
}

impl MultiSort {
    /// Algorithm this processor runs.
    pub fn algorithm(&self) -> SortAlgorithm {
        self.processor.algorithm()
    }

    /// Sort every input; results are returned in input order.
    pub fn run<T, I>(&self, inputs: &[I]) -> Result<Vec<SortResult<T>>, SortError>
    where
        T: PartialOrd + Clone + Send + Sync,
        I: SortInput<T>,
    {
        let slices = inputs
            .iter()
            .map(SortInput::as_sort_slice)
            .collect::<Result<Vec<&[T]>, _>>()?;

        for &slice in &slices {
            Validator::validate_len(slice.len(), self.max_len)?;
            Validator::validate_sequence(slice)?;
        }

        log::debug!(
            "sorting {} inputs with {} (parallel: {})",
            slices.len(),
            self.processor.algorithm(),
            self.parallel
        );

        if self.parallel {
            self.run_parallel(&slices)
        } else {
            run_inputs_sequential(&self.processor, &slices)
        }
    }

    #[cfg(feature = "cpu")]
    fn run_parallel<T>(&self, slices: &[&[T]]) -> Result<Vec<SortResult<T>>, SortError>
    where
        T: PartialOrd + Clone + Send + Sync,
    {
        run_inputs_parallel(&self.processor, slices)
    }

    // Fallback to sequential if cpu feature is disabled
    #[cfg(not(feature = "cpu"))]
    fn run_parallel<T>(&self, slices: &[&[T]]) -> Result<Vec<SortResult<T>>, SortError>
    where
        T: PartialOrd + Clone + Send + Sync,
    {
        run_inputs_sequential(&self.processor, slices)
    }
}
