#![cfg(feature = "dev")]
//! Tests for trace replay and statistics.
//!
//! These tests verify:
//! - Replay of produced and hand-written traces
//! - Error reporting for foreign traces
//! - Intermediate state iteration
//! - Trace statistics and their display
//!
//! ## Test Organization
//!
//! 1. **Replay** - Final state, step-wise replayer, resume
//! 2. **Foreign Traces** - Out-of-range indices
//! 3. **Replay States** - Iteration and early stop
//! 4. **Statistics** - Counts, ratios, display

use approx::assert_relative_eq;

use sortrace::internals::algorithms::method::SortAlgorithm;
use sortrace::internals::engine::executor::SortExecutor;
use sortrace::internals::evaluation::replay::{replay, ReplayStates, Replayer};
use sortrace::internals::evaluation::stats::TraceStats;
use sortrace::internals::primitives::errors::SortError;
use sortrace::internals::primitives::trace::{Trace, TraceEvent};

// ============================================================================
// Helper Functions
// ============================================================================

fn foreign_trace() -> Trace<i32> {
    Trace::from(vec![
        TraceEvent::Compare { i: 0, j: 1 },
        TraceEvent::Swap {
            i: 0,
            value_i: 2,
            j: 1,
            value_j: 1,
        },
        TraceEvent::Compare { i: 1, j: 7 },
        TraceEvent::NoOp,
    ])
}

// ============================================================================
// Replay Tests
// ============================================================================

/// Test replay of every algorithm's trace ends in the sorted output.
#[test]
fn test_replay_reaches_sorted_output() {
    let input = vec![31, 4, 15, 92, 65, 35, 89, 79, 32, 38, 46, 26, 43];
    for algorithm in SortAlgorithm::ALL {
        let output = SortExecutor::new(algorithm).run(&input);
        assert_eq!(replay(&input, &output.trace), Ok(output.sorted), "{algorithm}");
    }
}

/// Test the replayer applies events one at a time.
#[test]
fn test_replayer_step_by_step() {
    let mut replayer = Replayer::new(&[1, 2]);
    let trace = foreign_trace();

    replayer.apply(&trace[0]).unwrap();
    assert_eq!(replayer.state(), &[1, 2]);
    assert_eq!(replayer.position(), 1);

    replayer.apply(&trace[1]).unwrap();
    assert_eq!(replayer.state(), &[2, 1]);
    assert_eq!(replayer.into_state(), vec![2, 1]);
}

/// Test a resumed replayer continues from its state.
#[test]
fn test_replayer_resume() {
    let mut replayer = Replayer::resume(vec![9, 9], 5);
    replayer.apply(&TraceEvent::NoOp).unwrap();

    assert_eq!(replayer.position(), 6);
    assert_eq!(replayer.state(), &[9, 9]);
}

// ============================================================================
// Foreign Trace Tests
// ============================================================================

/// Test out-of-range indices fail without panicking.
#[test]
fn test_replay_out_of_bounds() {
    let res = replay(&[1, 2], &foreign_trace());

    assert_eq!(
        res,
        Err(SortError::IndexOutOfBounds {
            step: 2,
            index: 7,
            len: 2
        })
    );
}

// ============================================================================
// Replay State Tests
// ============================================================================

/// Test one state is yielded per event.
#[test]
fn test_replay_states() {
    let input = [3, 1, 2];
    let output = SortExecutor::new(SortAlgorithm::Bubble).run(&input);

    let states: Vec<Vec<i32>> = ReplayStates::new(&input, &output.trace)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(states.len(), output.trace.len());
    assert_eq!(states[1], vec![1, 3, 2]);
    assert_eq!(states.last(), Some(&output.sorted));
}

/// Test iteration stops after the first error.
#[test]
fn test_replay_states_stop_on_error() {
    let trace = foreign_trace();
    let items: Vec<_> = ReplayStates::new(&[1, 2], &trace).collect();

    assert_eq!(items.len(), 3);
    assert!(items[0].is_ok());
    assert!(items[1].is_ok());
    assert!(matches!(
        items[2],
        Err(SortError::IndexOutOfBounds { step: 2, .. })
    ));
}

// ============================================================================
// Statistics Tests
// ============================================================================

/// Test counts for the quick sort trace of equal keys.
#[test]
fn test_stats_counts() {
    let output = SortExecutor::new(SortAlgorithm::Quick).run(&[2, 2, 2]);
    let stats = TraceStats::compute(&output.trace, 3);

    assert_eq!(stats.elements, 3);
    assert_eq!(stats.steps, 8);
    assert_eq!(stats.comparisons, 3);
    assert_eq!(stats.no_ops, 3);
    assert_eq!(stats.swaps, 2);
    assert_eq!(stats.self_swaps, 0);
    assert_eq!(stats.effective_swaps(), 2);
    assert_eq!(stats.steps, stats.comparisons + stats.swaps + stats.no_ops);
}

/// Test self-swaps are counted separately.
#[test]
fn test_stats_self_swaps() {
    let output = SortExecutor::new(SortAlgorithm::Quick).run(&[1, 2]);
    let stats = TraceStats::compute(&output.trace, 2);

    assert_eq!(stats.swaps, 2);
    assert_eq!(stats.self_swaps, 2);
    assert_eq!(stats.effective_swaps(), 0);
    assert_relative_eq!(stats.swap_ratio(), 2.0);
}

/// Test the ratio of an empty trace.
#[test]
fn test_stats_empty() {
    let stats = TraceStats::compute(&Trace::<i32>::new(), 0);

    assert_eq!(stats, TraceStats::default());
    assert_relative_eq!(stats.swap_ratio(), 0.0);
}

/// Test the statistics display block.
#[test]
fn test_stats_display() {
    let output = SortExecutor::new(SortAlgorithm::Bubble).run(&[5, 3, 8, 1]);
    let text = TraceStats::compute(&output.trace, 4).to_string();

    assert!(text.starts_with("Trace Statistics:"));
    assert!(text.contains("Comparisons:  6"));
    assert!(text.contains("Swaps:        4"));
    assert!(text.ends_with("Swap ratio:   0.6667"));
}
