//! Error types for trace-recording sort operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! a run, validating input, replaying a trace, or driving a playback cursor.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending index, step, or bound.
//! * **Deferred**: Builder misconfiguration is recorded and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Elements that cannot be ordered, oversized inputs.
//! 2. **Trace validation**: Out-of-range indices, broken compare/resolve pairing.
//! 3. **Playback**: Seeking beyond the end of a trace.
//! 4. **Configuration**: Duplicate parameters, unsupported adapter features.
//!
//! ## Invariants
//!
//! * A successful sort never produces an error; all sorts are total over valid input.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide partial-sort recovery.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for trace-recording sort operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// An element cannot be ordered (e.g. a NaN float).
    InvalidInput(String),

    /// Input is longer than the configured maximum.
    SequenceTooLong {
        /// Number of elements provided.
        got: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Generator range has `min > max`.
    InvalidRange {
        /// Lower bound provided.
        min: i64,
        /// Upper bound provided.
        max: i64,
    },

    /// A trace event references an index outside the sequence.
    IndexOutOfBounds {
        /// Position of the event in the trace.
        step: usize,
        /// Offending index.
        index: usize,
        /// Sequence length.
        len: usize,
    },

    /// A `Compare` event is not followed by a `Swap` or `NoOp`.
    UnpairedCompare {
        /// Position of the unpaired `Compare` in the trace.
        step: usize,
    },

    /// Replaying the recorded trace did not reproduce the sorted output.
    ReplayMismatch {
        /// First position at which replayed and sorted states differ.
        index: usize,
    },

    /// Playback seek target lies beyond the end of the trace.
    InvalidSeek {
        /// Requested position.
        position: usize,
        /// Number of events in the trace.
        len: usize,
    },

    /// Selected adapter does not support the requested feature.
    UnsupportedFeature {
        /// Name of the adapter (e.g., "Batch", "Playback").
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::SequenceTooLong { got, max } => {
                write!(f, "Sequence too long: got {got} elements, limit is {max}")
            }
            Self::InvalidRange { min, max } => {
                write!(f, "Invalid range: [{min}, {max}] (min must be <= max)")
            }
            Self::IndexOutOfBounds { step, index, len } => {
                write!(
                    f,
                    "Trace step {step} references index {index}, sequence length is {len}"
                )
            }
            Self::UnpairedCompare { step } => {
                write!(f, "Compare at trace step {step} is not followed by Swap or NoOp")
            }
            Self::ReplayMismatch { index } => {
                write!(f, "Replayed trace diverges from sorted output at index {index}")
            }
            Self::InvalidSeek { position, len } => {
                write!(f, "Invalid seek: position {position} (trace has {len} steps)")
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
