//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer runs a selected algorithm over a traced copy of the input,
//! validates inputs and finished traces, and packages results for callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for trace-recording sorts.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sort runs.
pub mod output;
