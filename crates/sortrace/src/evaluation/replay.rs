//! Trace replay.
//!
//! ## Purpose
//!
//! This module reconstructs the state of a sequence at any point of a run by
//! applying recorded events to the original input. No comparison is
//! re-evaluated; the trace alone drives the state.
//!
//! ## Design notes
//!
//! * **Assignment semantics**: `Swap { i, value_i, j, value_j }` sets both slots
//!   to the carried values, in that order.
//! * **Untrusted input**: Indices are bounds-checked so a foreign or corrupted
//!   trace fails with an error instead of panicking.
//!
//! ## Key concepts
//!
//! * **Replayer**: A cursor that applies one event at a time.
//! * **ReplayStates**: Iterator over the state after every event.
//!
//! ## Invariants
//!
//! * Replaying a trace produced by this crate over its input yields the sorted output.
//! * `Compare` and `NoOp` never change state.
//!
//! ## Non-goals
//!
//! * This module does not check the compare/resolve pairing (see `engine::validator`).
//! * This module does not pace playback in time.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::slice::Iter;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::trace::{Trace, TraceEvent};

// ============================================================================
// Replayer
// ============================================================================

/// Applies trace events to a copy of the initial sequence.
#[derive(Debug, Clone)]
pub struct Replayer<T> {
    state: Vec<T>,
    position: usize,
}

impl<T: Clone> Replayer<T> {
    /// Start from a copy of `initial`.
    pub fn new(initial: &[T]) -> Self {
        Self {
            state: initial.to_vec(),
            position: 0,
        }
    }

    /// Continue from a known `state` reached after `position` events.
    pub fn resume(state: Vec<T>, position: usize) -> Self {
        Self { state, position }
    }

    /// Apply the next event.
    pub fn apply(&mut self, event: &TraceEvent<T>) -> Result<(), SortError> {
        let len = self.state.len();
        let step = self.position;
        let check = |index: usize| {
            if index < len {
                Ok(())
            } else {
                Err(SortError::IndexOutOfBounds { step, index, len })
            }
        };

        match event {
            TraceEvent::Compare { i, j } => {
                check(*i)?;
                check(*j)?;
            }
            TraceEvent::Swap {
                i,
                value_i,
                j,
                value_j,
            } => {
                check(*i)?;
                check(*j)?;
                self.state[*i] = value_i.clone();
                self.state[*j] = value_j.clone();
            }
            TraceEvent::NoOp => {}
        }

        self.position += 1;
        Ok(())
    }

    /// State after the events applied so far.
    #[inline]
    pub fn state(&self) -> &[T] {
        &self.state
    }

    /// Number of events applied so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Consume the replayer and return the current state.
    pub fn into_state(self) -> Vec<T> {
        self.state
    }
}

/// Replay the whole `trace` over `initial` and return the final state.
pub fn replay<T: Clone>(initial: &[T], trace: &Trace<T>) -> Result<Vec<T>, SortError> {
    let mut replayer = Replayer::new(initial);
    for event in trace {
        replayer.apply(event)?;
    }
    Ok(replayer.into_state())
}

// ============================================================================
// Intermediate States
// ============================================================================

/// Iterator over the state after each event of a trace.
///
/// Stops after the first invalid event, yielding its error once.
#[derive(Debug, Clone)]
pub struct ReplayStates<'a, T> {
    replayer: Replayer<T>,
    events: Iter<'a, TraceEvent<T>>,
    failed: bool,
}

impl<'a, T: Clone> ReplayStates<'a, T> {
    /// Walk `trace` starting from `initial`.
    pub fn new(initial: &[T], trace: &'a Trace<T>) -> Self {
        Self {
            replayer: Replayer::new(initial),
            events: trace.iter(),
            failed: false,
        }
    }
}

impl<T: Clone> Iterator for ReplayStates<'_, T> {
    type Item = Result<Vec<T>, SortError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let event = self.events.next()?;
        match self.replayer.apply(event) {
            Ok(()) => Some(Ok(self.replayer.state().to_vec())),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
