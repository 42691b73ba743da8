//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing execution modes built on the engine:
//!
//! - **Batch**: Sort a whole sequence and return the result with its trace
//! - **Playback**: Step through a recorded run one event at a time
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Whole-run batch adapter.
pub mod batch;

/// Step-wise playback adapter.
pub mod playback;
