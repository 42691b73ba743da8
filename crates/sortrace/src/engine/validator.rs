//! Input and trace validation.
//!
//! ## Purpose
//!
//! This module checks everything that can be wrong before or after a run:
//! elements that cannot be ordered, oversized inputs, traces that break the
//! compare/resolve pairing, and replays that do not land on the sorted output.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Element checks only need `PartialOrd`.
//!
//! ## Key concepts
//!
//! * **Comparability**: An element that is not comparable with itself (NaN)
//!   would make every ordering decision meaningless, so it is rejected.
//! * **Pairing**: Each `Compare` must be followed by a `Swap` or `NoOp`.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, repair, or filter input data.
//! * This module does not replay traces (see `evaluation::replay`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::trace::{Trace, TraceEvent};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sort input, configuration, and traces.
///
/// All methods return `Result<(), SortError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate that every element can be ordered.
    ///
    /// Empty and single-element sequences are valid.
    pub fn validate_sequence<T: PartialOrd>(sequence: &[T]) -> Result<(), SortError> {
        for (index, value) in sequence.iter().enumerate() {
            if value.partial_cmp(value).is_none() {
                return Err(SortError::InvalidInput(format!(
                    "element at index {} is not comparable",
                    index
                )));
            }
        }
        Ok(())
    }

    /// Validate the sequence length against an optional limit.
    pub fn validate_len(len: usize, max: Option<usize>) -> Result<(), SortError> {
        match max {
            Some(max) if len > max => Err(SortError::SequenceTooLong { got: len, max }),
            _ => Ok(()),
        }
    }

    // ========================================================================
    // Trace Validation
    // ========================================================================

    /// Validate index bounds and compare/resolve pairing of `trace` over `len` elements.
    pub fn validate_trace<T>(trace: &Trace<T>, len: usize) -> Result<(), SortError> {
        let events = trace.events();

        for (step, event) in events.iter().enumerate() {
            if let Some((i, j)) = event.indices() {
                for index in [i, j] {
                    if index >= len {
                        return Err(SortError::IndexOutOfBounds { step, index, len });
                    }
                }
            }

            if let TraceEvent::Compare { .. } = event {
                let resolved = events.get(step + 1).is_some_and(TraceEvent::is_resolution);
                if !resolved {
                    return Err(SortError::UnpairedCompare { step });
                }
            }
        }

        Ok(())
    }

    /// Validate that a replayed state equals the sorted output.
    pub fn validate_replay<T: PartialEq>(replayed: &[T], sorted: &[T]) -> Result<(), SortError> {
        if let Some(index) = replayed
            .iter()
            .zip(sorted.iter())
            .position(|(a, b)| a != b)
        {
            return Err(SortError::ReplayMismatch { index });
        }
        if replayed.len() != sorted.len() {
            return Err(SortError::ReplayMismatch {
                index: replayed.len().min(sorted.len()),
            });
        }
        Ok(())
    }

    /// Validate a playback seek target.
    pub fn validate_seek(position: usize, len: usize) -> Result<(), SortError> {
        if position > len {
            return Err(SortError::InvalidSeek { position, len });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SortError> {
        if let Some(param) = duplicate_param {
            return Err(SortError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
