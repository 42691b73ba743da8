//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer works on finished traces: it replays them to reconstruct
//! intermediate states and summarizes what each run did.
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
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Trace replay.
pub mod replay;

/// Trace statistics.
pub mod stats;
