//! Side-by-side comparison of traced sorts.
//!
//! ## Purpose
//!
//! This module runs several algorithms over the same input and collects their
//! results, so a front end can animate them next to each other or report
//! which one needed the fewest steps.
//!
//! ## Design notes
//!
//! * **Parallelism**: Each algorithm runs as an independent rayon task (`cpu` feature).
//! * **Ordering**: Runs are reported in the order the algorithms were selected.
//! * **Delegation**: Each run is a plain `sortrace` batch run.
//!
//! ## Invariants
//!
//! * Each algorithm appears at most once.
//! * Every run receives its own copy of the input.
//!
//! ## Non-goals
//!
//! * This module does not synchronize playback between runs.

// External dependencies
use std::fmt::{Display, Formatter, Result as FmtResult};

// Export dependencies from sortrace crate
use sortrace::internals::adapters::batch::BatchSort;
use sortrace::internals::algorithms::method::SortAlgorithm;
use sortrace::internals::engine::output::SortResult;
use sortrace::internals::engine::validator::Validator;
use sortrace::internals::evaluation::stats::TraceStats;
use sortrace::internals::primitives::errors::SortError;

// Internal dependencies
#[cfg(feature = "cpu")]
use crate::engine::executor::run_processors_parallel;
use crate::engine::executor::{run_processors_sequential, RunOptions};
use crate::input::SortInput;

// ============================================================================
// Comparison Builder
// ============================================================================

/// Builder for a multi-algorithm comparison.
#[derive(Debug, Clone)]
pub struct ComparisonBuilder {
    /// Algorithms to run, in report order (all four when unset).
    pub algorithms: Option<Vec<SortAlgorithm>>,

    /// Options applied to every run.
    pub options: RunOptions,

    /// Run algorithms on the rayon thread pool.
    pub parallel: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for ComparisonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonBuilder {
    /// Create a builder comparing every supported algorithm.
    ///
    /// Defaults:
    /// * algorithms: all four, in `SortAlgorithm::ALL` order
    /// * parallel: true
    pub fn new() -> Self {
        Self {
            algorithms: None,
            options: RunOptions::default(),
            parallel: true,
            duplicate_param: None,
        }
    }

    /// Select the algorithms to compare.
    pub fn algorithms(mut self, algorithms: &[SortAlgorithm]) -> Self {
        if self.algorithms.is_some() {
            self.duplicate_param = Some("algorithms");
        }
        self.algorithms = Some(algorithms.to_vec());
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

    /// Build the comparison.
    pub fn build(self) -> Result<Comparison, SortError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let algorithms = self
            .algorithms
            .unwrap_or_else(|| SortAlgorithm::ALL.to_vec());

        if algorithms.is_empty() {
            return Err(SortError::InvalidInput(
                "at least one algorithm must be selected".to_string(),
            ));
        }
        for (k, algorithm) in algorithms.iter().enumerate() {
            if algorithms[..k].contains(algorithm) {
                return Err(SortError::InvalidInput(format!(
                    "algorithm '{}' selected more than once",
                    algorithm
                )));
            }
        }

        let processors = algorithms
            .iter()
            .map(|&algorithm| self.options.processor(algorithm))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Comparison {
            processors,
            parallel: self.parallel,
        })
    }
}

// ============================================================================
// Comparison Processor
// ============================================================================

/// Runs a fixed set of algorithms over any input.
#[derive(Debug, Clone)]
pub struct Comparison {
    processors: Vec<BatchSort>,
    parallel: bool,
}

impl Comparison {
    /// Algorithms in report order.
    pub fn algorithms(&self) -> Vec<SortAlgorithm> {
        self.processors.iter().map(|p| p.algorithm()).collect()
    }

    /// Run every algorithm over `input`.
    pub fn run<T, I>(&self, input: &I) -> Result<ComparisonResult<T>, SortError>
    where
        T: PartialOrd + Clone + Send + Sync,
        I: SortInput<T> + ?Sized,
    {
        let slice = input.as_sort_slice()?;
        log::debug!(
            "comparing {} algorithms on {} elements (parallel: {})",
            self.processors.len(),
            slice.len(),
            self.parallel
        );

        let runs = if self.parallel {
            self.run_parallel(slice)?
        } else {
            run_processors_sequential(&self.processors, slice)?
        };

        Ok(ComparisonResult {
            input: slice.to_vec(),
            runs,
        })
    }

    #[cfg(feature = "cpu")]
    fn run_parallel<T>(&self, slice: &[T]) -> Result<Vec<SortResult<T>>, SortError>
    where
        T: PartialOrd + Clone + Send + Sync,
    {
        run_processors_parallel(&self.processors, slice)
    }

    // Fallback to sequential if cpu feature is disabled
    #[cfg(not(feature = "cpu"))]
    fn run_parallel<T>(&self, slice: &[T]) -> Result<Vec<SortResult<T>>, SortError>
    where
        T: PartialOrd + Clone + Send + Sync,
    {
        run_processors_sequential(&self.processors, slice)
    }
}

// ============================================================================
// Comparison Result
// ============================================================================

/// Results of one comparison, one run per algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult<T> {
    /// Copy of the compared input.
    pub input: Vec<T>,

    /// Runs in the order the algorithms were selected.
    pub runs: Vec<SortResult<T>>,
}

impl<T> ComparisonResult<T> {
    /// Result for `algorithm`, if it was part of the comparison.
    pub fn get(&self, algorithm: SortAlgorithm) -> Option<&SortResult<T>> {
        self.runs.iter().find(|run| run.algorithm == algorithm)
    }

    /// Algorithm with the shortest trace (first selected wins ties).
    pub fn fewest_steps(&self) -> Option<SortAlgorithm> {
        self.runs
            .iter()
            .min_by_key(|run| run.trace.len())
            .map(|run| run.algorithm)
    }

    /// Algorithm with the fewest comparisons (first selected wins ties).
    pub fn fewest_comparisons(&self) -> Option<SortAlgorithm> {
        self.runs
            .iter()
            .min_by_key(|run| run.trace.comparisons())
            .map(|run| run.algorithm)
    }

    /// Operation counts for every run, in report order.
    pub fn stats(&self) -> Vec<(SortAlgorithm, TraceStats)> {
        self.runs
            .iter()
            .map(|run| {
                let stats = run
                    .stats
                    .unwrap_or_else(|| TraceStats::compute(&run.trace, run.sorted.len()));
                (run.algorithm, stats)
            })
            .collect()
    }
}

impl<T: PartialEq> ComparisonResult<T> {
    /// Whether every algorithm produced the same sorted output.
    pub fn outputs_agree(&self) -> bool {
        self.runs
            .windows(2)
            .all(|pair| pair[0].sorted == pair[1].sorted)
    }
}

impl<T> Display for ComparisonResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Comparison:")?;
        writeln!(f, "  Elements:    {}", self.input.len())?;
        writeln!(f, "  Algorithms:  {}", self.runs.len())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<16} {:>10} {:>12} {:>10} {:>8} {:>8}",
            "Algorithm", "Steps", "Comparisons", "Swaps", "No-ops", "Stable"
        )?;
        writeln!(f, "{:-<69}", "")?;

        for (algorithm, stats) in self.stats() {
            writeln!(
                f,
                "{:<16} {:>10} {:>12} {:>10} {:>8} {:>8}",
                algorithm.name(),
                stats.steps,
                stats.comparisons,
                stats.swaps,
                stats.no_ops,
                if algorithm.is_stable() { "yes" } else { "no" }
            )?;
        }

        Ok(())
    }
}
