//! Input abstractions for traced sorts.
//!
//! ## Purpose
//!
//! This module lets the parallel entry points accept slices, vectors, and
//! one-dimensional `ndarray` arrays through a single trait.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Provides direct slice access to underlying data buffers.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected before any sorting.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container, in order.
//!
//! ## Non-goals
//!
//! * This module does not reshape multi-dimensional arrays.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};

// Export dependencies from sortrace crate
use sortrace::internals::primitives::errors::SortError;

/// Trait for types that can be sorted with a trace.
pub trait SortInput<T> {
    /// Convert the input to a contiguous slice.
    fn as_sort_slice(&self) -> Result<&[T], SortError>;
}

impl<T> SortInput<T> for [T] {
    fn as_sort_slice(&self) -> Result<&[T], SortError> {
        Ok(self)
    }
}

impl<T> SortInput<T> for Vec<T> {
    fn as_sort_slice(&self) -> Result<&[T], SortError> {
        Ok(self.as_slice())
    }
}

impl<T, S> SortInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_sort_slice(&self) -> Result<&[T], SortError> {
        self.as_slice().ok_or_else(|| {
            SortError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
