//! High-level API for parallel traced sorts.
//!
//! ## Purpose
//!
//! This module re-exports the `sortrace` surface and adds the parallel
//! builders: [`ComparisonBuilder`] for several algorithms on one input and
//! [`MultiSortBuilder`] for one algorithm on many inputs.

// External dependencies
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// Internal dependencies
use crate::input::SortInput;

// Publicly re-exported types
pub use crate::adapters::compare::{Comparison, ComparisonBuilder, ComparisonResult};
pub use crate::adapters::multi::{MultiSort, MultiSortBuilder};
pub use crate::engine::executor::RunOptions;
pub use sortrace::internals::api::{
    replay, run_sort, Adapter, Batch, Frame, Playback, PlaybackSession, ReplayStates,
    SequenceGenerator, SortAdapter, SortAlgorithm, SortError, SortResult, SortTraceBuilder,
    Trace, TraceEvent, TraceStats,
};

/// Sort every input with `algorithm` and return each sorted copy with its trace.
///
/// Runs in parallel when the `cpu` feature is enabled.
#[allow(clippy::type_complexity)]
pub fn run_many<T, I>(
    algorithm: SortAlgorithm,
    inputs: &[I],
) -> Result<Vec<(Vec<T>, Trace<T>)>, SortError>
where
    T: PartialOrd + Clone + Send + Sync,
    I: SortInput<T> + Sync,
{
    #[cfg(feature = "cpu")]
    let iter = inputs.par_iter();
    #[cfg(not(feature = "cpu"))]
    let iter = inputs.iter();

    iter.map(|input| run_sort(algorithm, input.as_sort_slice()?))
        .collect()
}
