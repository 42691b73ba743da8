//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer implements the traceable comparison sorts. Each algorithm
//! operates only through a `TracedSequence`, so every comparison and every
//! data movement lands in the trace.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Algorithm selection.
pub mod method;

/// Bubble sort.
pub mod bubble;

/// Lomuto quick sort.
pub mod quick;

/// Stable merge sort.
pub mod merge;

/// Insertion sort.
pub mod insertion;
