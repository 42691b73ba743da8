//! # sortrace — Sorting with replayable animation traces
//!
//! Sort a sequence with a classic comparison sort and get back, next to the
//! sorted output, an ordered trace of every comparison and every exchange the
//! algorithm performed. A renderer can replay the trace one event at a time to
//! animate the run; the engine itself never sleeps, draws, or paces anything.
//!
//! ## Algorithms
//!
//! | Algorithm  | Stable | Comparisons          | Notes                                   |
//! |------------|--------|----------------------|-----------------------------------------|
//! | Bubble     | no     | exactly `n(n-1)/2`   | no early exit                           |
//! | Quick      | no     | `O(n log n)` average | Lomuto partition, last element as pivot |
//! | Merge      | yes    | `O(n log n)`         | ties go to the left run                 |
//! | Insertion  | yes    | `O(n^2)` worst case  | adjacent exchanges                      |
//!
//! ## Trace format
//!
//! A [`Trace`](prelude::Trace) is a list of events:
//!
//! * `Compare { i, j }`: the values at `i` and `j` were compared.
//! * `Swap { i, value_i, j, value_j }`: after this step `i` holds `value_i`
//!   and `j` holds `value_j`.
//! * `NoOp`: the preceding comparison required no exchange.
//!
//! Every `Compare` is immediately followed by a `Swap` or a `NoOp`. Applying
//! each `Swap` as two assignments to a copy of the input reproduces every
//! intermediate state and ends in the sorted output.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use sortrace::prelude::*;
//!
//! let (sorted, trace) = run_sort(Bubble, &[5, 3, 8, 1])?;
//!
//! assert_eq!(sorted, vec![1, 3, 5, 8]);
//! assert_eq!(trace.comparisons(), 6);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use sortrace::prelude::*;
//!
//! let data = vec![38, 27, 43, 3, 9, 82, 10];
//!
//! let model = SortTrace::new()
//!     .algorithm(Merge)       // Stable merge sort
//!     .max_len(1_000)         // Reject oversized inputs
//!     .return_stats()         // Count comparisons and swaps
//!     .verify_replay()        // Replay the trace before returning
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.run(&data)?;
//!
//! assert_eq!(result.sorted, vec![3, 9, 10, 27, 38, 43, 82]);
//! assert!(result.replay_verified);
//! println!("{}", result);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Algorithm:   Merge Sort
//!   Elements:    7
//!   Steps:       ...
//!   Replay:      Verified
//!   Input:       [38, 27, 43, 3, 9, 82, 10]
//!   Sorted:      [3, 9, 10, 27, 38, 43, 82]
//!
//! Trace Statistics:
//!   ...
//!
//! Trace:
//!     Step  Event
//! ----------------------------------------
//!        0  Compare(0, 1)
//!        1  Swap(0 <- 27, 1 <- 27)
//!   ...
//! ```
//!
//! ### Playback
//!
//! ```rust
//! use sortrace::prelude::*;
//!
//! let mut session = SortTrace::new()
//!     .algorithm(Quick)
//!     .adapter(Playback)
//!     .build()?
//!     .load(&[3, 1, 2])?;
//!
//! while let Some(frame) = session.step() {
//!     // Draw `frame.state`, highlighting `frame.highlight()`.
//!     let _ = (frame.state, frame.highlight());
//! }
//!
//! assert!(session.is_finished());
//! assert_eq!(session.current_state(), &[1, 2, 3]);
//!
//! session.seek(0)?;
//! assert_eq!(session.current_state(), &[3, 1, 2]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Execution Adapters
//!
//! | Adapter    | Use case                          | Output                    |
//! |------------|-----------------------------------|---------------------------|
//! | `Batch`    | Sort once, keep the whole trace   | `SortResult`              |
//! | `Playback` | Step through a run interactively  | `PlaybackSession`         |
//!
//! Adapter-specific options are rejected by `build()` with
//! `SortError::UnsupportedFeature` when set for the other adapter.
//!
//! ## Input Requirements
//!
//! * Elements implement `PartialOrd + Clone`.
//! * Every element must be comparable with itself; a NaN float fails with
//!   `SortError::InvalidInput` before anything is sorted.
//!
//! ## Logging
//!
//! Runs are logged through the [`log`](https://docs.rs/log) facade: `debug!`
//! when a run starts and finishes, `trace!` per partition or merge, and
//! `warn!` when replay verification fails. The crate never installs a logger.
//!
//! ## no_std Support
//!
//! Disable default features to build without `std` (requires `alloc`):
//!
//! ```toml
//! [dependencies]
//! sortrace = { version = "0.2", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - trace types, traced sequence, and utilities.
mod primitives;

// Layer 2: Algorithms - traceable comparison sorts.
mod algorithms;

// Layer 3: Evaluation - replay and statistics.
mod evaluation;

// Layer 4: Engine - dispatch, validation, and results.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API.
mod api;

// Standard sortrace prelude.
pub mod prelude {
    pub use crate::api::{
        replay, run_sort,
        Adapter::{Batch, Playback},
        Frame, PlaybackSession, PlaybackSort, ReplayStates, SequenceGenerator, SortAlgorithm,
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortError, SortResult, SortTraceBuilder as SortTrace, Trace, TraceEvent, TraceStats,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
