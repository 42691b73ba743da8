//! Parallel execution of independent traced sorts.
//!
//! ## Purpose
//!
//! This module runs several `BatchSort` processors over one input, or one
//! processor over many inputs. Every run owns its working copy and its trace,
//! so runs can execute on any thread in any order.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for run-level parallelism across CPU cores.
//! * **Ordering**: Results come back in the order the runs were requested.
//! * **Fallback**: The sequential drivers produce identical results.
//!
//! ## Invariants
//!
//! * A run's trace depends only on its algorithm and its input, never on scheduling.
//!
//! ## Non-goals
//!
//! * This module does not parallelize inside a single sort.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// Export dependencies from sortrace crate
use sortrace::internals::adapters::batch::BatchSort;
use sortrace::internals::algorithms::method::SortAlgorithm;
use sortrace::internals::api::{Batch, SortTraceBuilder};
use sortrace::internals::engine::output::SortResult;
use sortrace::internals::primitives::errors::SortError;

// ============================================================================
// Run Options
// ============================================================================

/// Options shared by every run of a parallel job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum accepted sequence length.
    pub max_len: Option<usize>,

    /// Compute trace statistics for every run.
    pub return_stats: bool,

    /// Replay and check every trace.
    pub verify_replay: bool,
}

impl RunOptions {
    /// Build a batch processor for `algorithm` with these options.
    pub fn processor(&self, algorithm: SortAlgorithm) -> Result<BatchSort, SortError> {
        let mut builder = SortTraceBuilder::new().algorithm(algorithm).adapter(Batch);
        if let Some(max_len) = self.max_len {
            builder = builder.max_len(max_len);
        }
        if self.return_stats {
            builder = builder.return_stats();
        }
        if self.verify_replay {
            builder = builder.verify_replay();
        }
        builder.build()
    }
}

// ============================================================================
// One Input, Many Processors
// ============================================================================

/// Run every processor over `input` in parallel.
#[cfg(feature = "cpu")]
pub fn run_processors_parallel<T>(
    processors: &[BatchSort],
    input: &[T],
) -> Result<Vec<SortResult<T>>, SortError>
where
    T: PartialOrd + Clone + Send + Sync,
{
    processors
        .par_iter()
        .map(|processor| processor.run(input))
        .collect()
}

/// Run every processor over `input` on the calling thread.
pub fn run_processors_sequential<T>(
    processors: &[BatchSort],
    input: &[T],
) -> Result<Vec<SortResult<T>>, SortError>
where
    T: PartialOrd + Clone,
{
    processors
        .iter()
        .map(|processor| processor.run(input))
        .collect()
}

// ============================================================================
// One Processor, Many Inputs
// ============================================================================

/// Run `processor` over every input in parallel.
#[cfg(feature = "cpu")]
pub fn run_inputs_parallel<T>(
    processor: &BatchSort,
    inputs: &[&[T]],
) -> Result<Vec<SortResult<T>>, SortError>
where
    T: PartialOrd + Clone + Send + Sync,
{
    inputs.par_iter().map(|input| processor.run(input)).collect()
}

/// Run `processor` over every input on the calling thread.
pub fn run_inputs_sequential<T>(
    processor: &BatchSort,
    inputs: &[&[T]],
) -> Result<Vec<SortResult<T>>, SortError>
where
    T: PartialOrd + Clone,
{
    inputs.iter().map(|input| processor.run(input)).collect()
}
