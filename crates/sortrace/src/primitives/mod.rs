//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the trace protocol, the traced working sequence, and
//! the shared utilities every other layer builds on. It has zero internal
//! dependencies within the crate.
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
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Trace events and container.
pub mod trace;

/// Traced working sequence.
pub mod sequence;

/// Merge scratch space.
pub mod buffer;

/// Shared error types.
pub mod errors;

/// Seeded input generation.
pub mod generator;
