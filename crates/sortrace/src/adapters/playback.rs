//! Playback adapter for stepping through a recorded run.
//!
//! ## Purpose
//!
//! This module sorts a sequence once and then exposes the trace as a cursor
//! a renderer can drive: forward, backward, or straight to any step. Pacing
//! is left entirely to the caller.
//!
//! ## Design notes
//!
//! * **Replay-driven**: The displayed state is rebuilt from the trace, never
//!   by re-running comparisons.
//! * **Snapshots**: With `record_states` every intermediate state is kept, so
//!   seeking backwards is a copy instead of a replay from the start.
//! * **Validated**: The trace is checked once at load, so stepping cannot fail.
//!
//! ## Key concepts
//!
//! * **Position**: Number of events applied; `0` is the input, `len()` the sorted output.
//! * **Frame**: The event just applied together with the resulting state.
//! * **Highlight**: The index pair of the current event (none for `NoOp`).
//!
//! ## Invariants
//!
//! * `0 <= position() <= len()`.
//! * `current_state()` equals the replay of the first `position()` events.
//!
//! ## Non-goals
//!
//! * This adapter does not sleep, schedule, or render.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::method::SortAlgorithm;
use crate::engine::executor::SortExecutor;
use crate::engine::validator::Validator;
use crate::evaluation::replay::{ReplayStates, Replayer};
use crate::evaluation::stats::TraceStats;
use crate::primitives::errors::SortError;
use crate::primitives::trace::{Trace, TraceEvent};

// ============================================================================
// Playback Builder
// ============================================================================

/// Builder for the playback processor.
#[derive(Debug, Clone)]
pub struct PlaybackSortBuilder {
    /// Algorithm to run.
    pub algorithm: SortAlgorithm,

    /// Maximum accepted sequence length.
    pub max_len: Option<usize>,

    /// Keep a snapshot of every intermediate state.
    pub record_states: bool,

    /// Step to position the cursor at after loading.
    pub start_at: Option<usize>,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<SortError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for PlaybackSortBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackSortBuilder {
    /// Create a new playback builder with default parameters.
    fn new() -> Self {
        Self {
            algorithm: SortAlgorithm::default(),
            max_len: None,
            record_states: false,
            start_at: None,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the algorithm.
    pub fn algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Reject inputs longer than `max_len`.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Keep every intermediate state for constant-time seeking.
    pub fn record_states(mut self) -> Self {
        self.record_states = true;
        self
    }

    /// Position the cursor at `step` after loading.
    pub fn start_at(mut self, step: usize) -> Self {
        self.start_at = Some(step);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the playback processor.
    pub fn build(self) -> Result<PlaybackSort, SortError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(PlaybackSort { config: self })
    }
}

// ============================================================================
// Playback Processor
// ============================================================================

/// Playback processor; each `load` produces an independent session.
#[derive(Debug, Clone)]
pub struct PlaybackSort {
    config: PlaybackSortBuilder,
}

impl PlaybackSort {
    /// Algorithm this processor runs.
    pub fn algorithm(&self) -> SortAlgorithm {
        self.config.algorithm
    }

    /// Sort a copy of `input` and open a playback session over its trace.
    pub fn load<T: PartialOrd + Clone>(
        &self,
        input: &[T],
    ) -> Result<PlaybackSession<T>, SortError> {
        Validator::validate_len(input.len(), self.config.max_len)?;
        Validator::validate_sequence(input)?;

        let output = SortExecutor::new(self.config.algorithm).run(input);
        Validator::validate_trace(&output.trace, input.len())?;

        let snapshots = if self.config.record_states {
            let mut states = Vec::with_capacity(output.trace.len() + 1);
            states.push(input.to_vec());
            for state in ReplayStates::new(input, &output.trace) {
                states.push(state?);
            }
            Some(states)
        } else {
            None
        };

        let mut session = PlaybackSession {
            algorithm: self.config.algorithm,
            initial: input.to_vec(),
            sorted: output.sorted,
            trace: output.trace,
            replayer: Replayer::new(input),
            snapshots,
        };

        if let Some(step) = self.config.start_at {
            session.seek(step)?;
        }

        Ok(session)
    }
}

// ============================================================================
// Playback Session
// ============================================================================

/// One rendered step: the event just applied and the state it produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a, T> {
    /// Zero-based index of the event in the trace.
    pub step: usize,

    /// The applied event.
    pub event: &'a TraceEvent<T>,

    /// State after applying the event.
    pub state: &'a [T],
}

impl<T> Frame<'_, T> {
    /// Index pair to highlight, if the event touches two positions.
    pub fn highlight(&self) -> Option<(usize, usize)> {
        self.event.indices()
    }
}

/// Cursor over a recorded run.
#[derive(Debug, Clone)]
pub struct PlaybackSession<T> {
    algorithm: SortAlgorithm,
    initial: Vec<T>,
    sorted: Vec<T>,
    trace: Trace<T>,
    replayer: Replayer<T>,
    snapshots: Option<Vec<Vec<T>>>,
}

impl<T: Clone> PlaybackSession<T> {
    // ========================================================================
    // Navigation
    // ========================================================================

    /// Apply the next event, or return `None` at the end of the trace.
    pub fn step(&mut self) -> Option<Frame<'_, T>> {
        let step = self.replayer.position();
        let event = self.trace.get(step)?;
        // Bounds were checked at load.
        self.replayer.apply(event).ok()?;
        Some(Frame {
            step,
            event,
            state: self.replayer.state(),
        })
    }

    /// Undo the last event. Returns `false` at the start of the trace.
    pub fn step_back(&mut self) -> bool {
        match self.position().checked_sub(1) {
            Some(target) => self.seek(target).is_ok(),
            None => false,
        }
    }

    /// Move the cursor so that exactly `position` events are applied.
    pub fn seek(&mut self, position: usize) -> Result<(), SortError> {
        Validator::validate_seek(position, self.trace.len())?;

        if let Some(snapshots) = &self.snapshots {
            self.replayer = Replayer::resume(snapshots[position].clone(), position);
            return Ok(());
        }

        if position < self.replayer.position() {
            self.reset();
        }
        while self.replayer.position() < position {
            let event = &self.trace[self.replayer.position()];
            self.replayer.apply(event)?;
        }
        Ok(())
    }

    /// Return to the unsorted input.
    pub fn reset(&mut self) {
        self.replayer = Replayer::new(&self.initial);
    }

    /// Jump to the sorted output.
    pub fn finish(&mut self) -> Result<(), SortError> {
        self.seek(self.trace.len())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of events applied so far.
    pub fn position(&self) -> usize {
        self.replayer.position()
    }

    /// Total number of events.
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Whether the trace has no events.
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Events left to apply.
    pub fn remaining(&self) -> usize {
        self.trace.len() - self.replayer.position()
    }

    /// Whether every event has been applied.
    pub fn is_finished(&self) -> bool {
        self.replayer.position() == self.trace.len()
    }

    /// State after the events applied so far.
    pub fn current_state(&self) -> &[T] {
        self.replayer.state()
    }

    /// Most recently applied event.
    pub fn current_event(&self) -> Option<&TraceEvent<T>> {
        self.position()
            .checked_sub(1)
            .and_then(|step| self.trace.get(step))
    }

    /// Index pair touched by the most recently applied event.
    pub fn highlight(&self) -> Option<(usize, usize)> {
        self.current_event().and_then(TraceEvent::indices)
    }

    /// The unsorted input.
    pub fn initial(&self) -> &[T] {
        &self.initial
    }

    /// The sorted output.
    pub fn sorted(&self) -> &[T] {
        &self.sorted
    }

    /// The full trace.
    pub fn trace(&self) -> &Trace<T> {
        &self.trace
    }

    /// Algorithm that produced the trace.
    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// Whether intermediate states were recorded.
    pub fn has_snapshots(&self) -> bool {
        self.snapshots.is_some()
    }

    /// Operation counts of the whole trace.
    pub fn stats(&self) -> TraceStats {
        TraceStats::compute(&self.trace, self.initial.len())
    }
}
