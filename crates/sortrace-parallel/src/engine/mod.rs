//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer fans independent sort runs out over the rayon thread pool, with
//! a sequential fallback when the `cpu` feature is disabled.

/// Parallel and sequential run drivers.
pub mod executor;
