//! # sortrace-parallel — Parallel runs for sortrace
//!
//! Extends [`sortrace`](https://docs.rs/sortrace) with run-level parallelism:
//! compare several algorithms on the same input, or sort many inputs with
//! one algorithm, with each run scheduled on the rayon thread pool. Inside a
//! run nothing changes: every trace is exactly what the sequential engine
//! would record.
//!
//! ## Quick Start
//!
//! ### Comparing algorithms
//!
//! ```rust
//! use sortrace_parallel::prelude::*;
//!
//! let comparison = Compare::new()
//!     .algorithms(&[Bubble, Quick, Merge])
//!     .return_stats()
//!     .build()?;
//!
//! let result = comparison.run(&vec![5, 3, 8, 1, 9, 2])?;
//!
//! assert!(result.outputs_agree());
//! assert_eq!(result.get(Bubble).map(|r| r.trace.comparisons()), Some(15));
//! println!("{}", result);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Many inputs
//!
//! ```rust
//! use sortrace_parallel::prelude::*;
//!
//! let inputs = vec![vec![3, 1, 2], vec![9, 7, 8, 6]];
//! let runs = run_many(Merge, &inputs)?;
//!
//! assert_eq!(runs[0].0, vec![1, 2, 3]);
//! assert_eq!(runs[1].0, vec![6, 7, 8, 9]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## ndarray Support
//!
//! Contiguous one-dimensional `ndarray` arrays are accepted wherever a slice
//! or `Vec` is.
//!
//! ## Features
//!
//! * `cpu` (default): schedule runs with `rayon`. Without it every entry
//!   point runs sequentially and returns identical results.

// Layer 4: Engine - parallel run drivers.
mod engine;

// Layer 5: Adapters - comparison and multi-input modes.
mod adapters;

// High-level API.
mod api;

// Input data handling.
mod input;

// Standard sortrace-parallel prelude.
pub mod prelude {
    pub use crate::api::{
        replay, run_many, run_sort,
        Adapter::{Batch, Playback},
        ComparisonBuilder as Compare, ComparisonResult, MultiSortBuilder as MultiSort,
        SequenceGenerator, SortAlgorithm,
        SortAlgorithm::{Bubble, Insertion, Merge, Quick},
        SortError, SortResult, SortTraceBuilder as SortTrace, Trace, TraceEvent, TraceStats,
    };
    pub use crate::input::SortInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
