//! Scratch buffers for sort runs.
//!
//! ## Purpose
//!
//! This module provides the reusable auxiliary storage merge sort copies each
//! subrange into before writing it back in order.
//!
//! ## Design notes
//!
//! * **Recycling**: One buffer is allocated per run and reused by every merge.
//! * **Lazy Expansion**: Capacity grows on demand and is never shrunk.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared between merges, never deallocated.
//! * Loaded values are addressed by their original sequence index.
//!
//! ## Non-goals
//!
//! * Thread-local caching (each run owns its buffer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Merge Buffer
// ============================================================================

/// Auxiliary copy of a subrange, addressed by the sequence indices it came from.
#[derive(Debug, Clone)]
pub struct MergeBuffer<T> {
    values: Vec<T>,
    offset: usize,
}

impl<T> Default for MergeBuffer<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            offset: 0,
        }
    }
}

impl<T: Clone> MergeBuffer<T> {
    /// Create a buffer able to hold `capacity` values without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            offset: 0,
        }
    }

    /// Copy `range` (starting at sequence index `offset`) into the buffer.
    pub fn load(&mut self, range: &[T], offset: usize) {
        self.values.clear();
        self.values.extend_from_slice(range);
        self.offset = offset;
    }

    /// Value copied from sequence index `src`.
    #[inline]
    pub fn value(&self, src: usize) -> &T {
        &self.values[src - self.offset]
    }

    /// Number of loaded values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is loaded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Currently allocated capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }
}
