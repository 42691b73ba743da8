//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides the parallel execution modes:
//!
//! - **Comparison**: Several algorithms on one input, side by side
//! - **Multi**: One algorithm on many inputs

/// Side-by-side algorithm comparison.
pub mod compare;

/// One algorithm over many inputs.
pub mod multi;
