//! Seeded random sequence generation.
//!
//! ## Purpose
//!
//! This module produces the random input sequences a visualizer shuffles in
//! when the user asks for a fresh array: `size` uniform integers in `[min, max]`.
//!
//! ## Design notes
//!
//! * **No-std**: Uses an internal LCG rather than an OS entropy source.
//! * **Reproducible**: The same seed, length, and range always give the same sequence.
//! * **Generic output**: Integers are cast into any `NumCast` type.
//!
//! ## Invariants
//!
//! * Every generated value lies in `[min, max]`.
//!
//! ## Non-goals
//!
//! * This module does not provide cryptographic or statistically strong randomness.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SortError;

/// Default number of generated values.
pub const DEFAULT_LEN: usize = 100;

/// Default inclusive lower bound.
pub const DEFAULT_MIN: i64 = 5;

/// Default inclusive upper bound.
pub const DEFAULT_MAX: i64 = 500;

// ============================================================================
// Internal PRNG
// ============================================================================

/// Minimal PRNG for no-std generation.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }
}

// ============================================================================
// Sequence Generator
// ============================================================================

/// Generator for uniform random integer sequences.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    rng: SimpleRng,
    len: usize,
    min: i64,
    max: i64,
}

impl SequenceGenerator {
    /// Create a generator with default length and range.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            len: DEFAULT_LEN,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }

    /// Set the number of values per sequence.
    pub fn size(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Set the inclusive value range.
    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Configured sequence length.
    pub fn sequence_len(&self) -> usize {
        self.len
    }

    /// Configured inclusive range.
    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    /// Draw a fresh sequence. Successive calls continue the same stream.
    pub fn generate<T: num_traits::NumCast>(&mut self) -> Result<Vec<T>, SortError> {
        if self.min > self.max {
            return Err(SortError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }

        let span = (i128::from(self.max) - i128::from(self.min) + 1) as u128;
        let mut out = Vec::with_capacity(self.len);
        for _ in 0..self.len {
            let offset = u128::from(self.rng.next_u64()) % span;
            let raw = (i128::from(self.min) + offset as i128) as i64;
            let value = num_traits::cast::<i64, T>(raw).ok_or_else(|| {
                SortError::InvalidInput(format!("generated value {raw} does not fit target type"))
            })?;
            out.push(value);
        }
        Ok(out)
    }
}
