#![cfg(feature = "dev")]
//! Tests for sort result types.
//!
//! These tests verify `SortResult` helpers and its human-readable summary:
//! - Query helpers and decomposition
//! - Intermediate state iteration
//! - Display output, including trace elision
//!
//! ## Test Organization
//!
//! 1. **Helpers** - Length, steps, parts
//! 2. **States** - Replay from the stored input
//! 3. **Display** - Summary, statistics, trace table

use sortrace::internals::algorithms::method::SortAlgorithm;
use sortrace::internals::engine::executor::SortExecutor;
use sortrace::internals::engine::output::SortResult;
use sortrace::internals::evaluation::stats::TraceStats;

// ============================================================================
// Helper Functions
// ============================================================================

fn make_result(algorithm: SortAlgorithm, input: &[i32], with_stats: bool) -> SortResult<i32> {
    let output = SortExecutor::new(algorithm).run(input);
    let stats = with_stats.then(|| TraceStats::compute(&output.trace, input.len()));
    SortResult {
        algorithm,
        input: input.to_vec(),
        sorted: output.sorted,
        trace: output.trace,
        stats,
        replay_verified: false,
    }
}

// ============================================================================
// Helper Tests
// ============================================================================

/// Test query helpers.
#[test]
fn test_result_helpers() {
    let result = make_result(SortAlgorithm::Bubble, &[5, 3, 8, 1], false);

    assert_eq!(result.len(), 4);
    assert!(!result.is_empty());
    assert_eq!(result.steps(), 12);
    assert!(!result.has_stats());

    let (sorted, trace) = result.into_parts();
    assert_eq!(sorted, vec![1, 3, 5, 8]);
    assert_eq!(trace.len(), 12);
}

// ============================================================================
// State Iteration Tests
// ============================================================================

/// Test states replay from the stored input to the sorted output.
#[test]
fn test_result_states() {
    let result = make_result(SortAlgorithm::Insertion, &[3, 1, 2], false);

    let states: Vec<Vec<i32>> = result
        .states()
        .collect::<Result<_, _>>()
        .expect("own trace replays");

    assert_eq!(states.len(), result.steps());
    assert_eq!(states[0], vec![3, 1, 2]);
    assert_eq!(states[1], vec![1, 3, 2]);
    assert_eq!(states.last(), Some(&result.sorted));
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary block.
#[test]
fn test_display_summary() {
    let mut result = make_result(SortAlgorithm::Quick, &[3, 1, 2], true);
    result.replay_verified = true;
    let text = result.to_string();

    assert!(text.contains("Algorithm:   Quick Sort"));
    assert!(text.contains("Elements:    3"));
    assert!(text.contains("Steps:       5"));
    assert!(text.contains("Replay:      Verified"));
    assert!(text.contains("Input:       [3, 1, 2]"));
    assert!(text.contains("Sorted:      [1, 2, 3]"));
    assert!(text.contains("Trace Statistics:"));
    assert!(text.contains("Compare(0, 2)"));
    assert!(text.contains("Swap(1 <- 2, 2 <- 3)"));
    assert!(!text.contains("..."));
}

/// Test long traces and sequences are elided in the middle.
#[test]
fn test_display_elides_long_output() {
    let input: Vec<i32> = (0..30).rev().collect();
    let result = make_result(SortAlgorithm::Bubble, &input, false);
    let text = result.to_string();

    // First and last ten trace rows plus one elision row.
    let rows = text
        .lines()
        .skip_while(|line| !line.starts_with("Trace:"))
        .skip(3)
        .count();
    assert_eq!(rows, 21);
    assert!(text.contains("Input:       [29, 28, 27, 26, 25, 24, 23, 22, 21, 20, ..., 9,"));
    assert!(!text.contains("Trace Statistics:"));
}
