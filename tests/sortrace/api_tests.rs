//! Tests for the high-level sortrace API.
//!
//! These tests verify the builder pattern and complete workflows through the
//! public surface only:
//! - Builder construction and adapter conversion
//! - Duplicate and unsupported parameters
//! - The `run_sort` entry point
//! - Replay of produced traces
//!
//! ## Test Organization
//!
//! 1. **Builder Construction** - Defaults, option propagation
//! 2. **Validation** - Duplicate parameters, unsupported features
//! 3. **Entry Point** - `run_sort` contract
//! 4. **Workflows** - Batch and playback end to end

use sortrace::prelude::*;

// ============================================================================
// Builder Construction Tests
// ============================================================================

/// Test the default builder runs bubble sort.
#[test]
fn test_builder_default_algorithm() {
    let result = SortTrace::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .run(&[3, 2, 1])
        .unwrap();

    assert_eq!(result.algorithm, Bubble);
    assert_eq!(result.sorted, vec![1, 2, 3]);
}

/// Test options propagate to the batch adapter.
#[test]
fn test_builder_propagates_batch_options() {
    let processor = SortTrace::new()
        .algorithm(Merge)
        .max_len(4)
        .return_stats()
        .verify_replay()
        .adapter(Batch)
        .build()
        .unwrap();

    let result = processor.run(&[4, 1, 3, 2]).unwrap();
    assert_eq!(result.algorithm, Merge);
    assert!(result.has_stats());
    assert!(result.replay_verified);

    assert_eq!(
        processor.run(&[5, 4, 3, 2, 1]).map(|r| r.sorted),
        Err(SortError::SequenceTooLong { got: 5, max: 4 })
    );
}

/// Test options propagate to the playback adapter.
#[test]
fn test_builder_propagates_playback_options() {
    let session = SortTrace::new()
        .algorithm(Insertion)
        .record_states()
        .start_at(1)
        .adapter(Playback)
        .build()
        .unwrap()
        .load(&[2, 1])
        .unwrap();

    assert_eq!(session.algorithm(), Insertion);
    assert!(session.has_snapshots());
    assert_eq!(session.position(), 1);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test a parameter set twice is rejected at build.
#[test]
fn test_duplicate_parameter() {
    let res = SortTrace::new()
        .algorithm(Quick)
        .algorithm(Merge)
        .adapter(Batch)
        .build();

    assert!(matches!(
        res,
        Err(SortError::DuplicateParameter {
            parameter: "algorithm"
        })
    ));
}

/// Test playback-only options are rejected by the batch adapter.
#[test]
fn test_batch_rejects_playback_options() {
    let res = SortTrace::new().start_at(3).adapter(Batch).build();
    assert!(matches!(
        res,
        Err(SortError::UnsupportedFeature {
            adapter: "Batch",
            feature: "start_at"
        })
    ));

    let res = SortTrace::new().record_states().adapter(Batch).build();
    assert!(matches!(
        res,
        Err(SortError::UnsupportedFeature {
            adapter: "Batch",
            feature: "record_states"
        })
    ));
}

/// Test batch-only options are rejected by the playback adapter.
#[test]
fn test_playback_rejects_batch_options() {
    let res = SortTrace::new().verify_replay().adapter(Playback).build();
    assert!(matches!(
        res,
        Err(SortError::UnsupportedFeature {
            adapter: "Playback",
            feature: "verify_replay"
        })
    ));

    let res = SortTrace::new().return_stats().adapter(Playback).build();
    assert!(matches!(
        res,
        Err(SortError::UnsupportedFeature {
            adapter: "Playback",
            feature: "return_stats"
        })
    ));
}

// ============================================================================
// Entry Point Tests
// ============================================================================

/// Test the worked bubble sort example.
#[test]
fn test_run_sort_bubble_example() {
    let (sorted, trace) = run_sort(Bubble, &[5, 3, 8, 1]).unwrap();

    assert_eq!(sorted, vec![1, 3, 5, 8]);
    assert_eq!(trace.comparisons(), 6);
    assert_eq!(trace[0], TraceEvent::Compare { i: 0, j: 1 });
    assert_eq!(
        trace[1],
        TraceEvent::Swap {
            i: 0,
            value_i: 3,
            j: 1,
            value_j: 5
        }
    );
}

/// Test run_sort leaves trivial input unchanged with an empty trace.
#[test]
fn test_run_sort_trivial() {
    for algorithm in SortAlgorithm::ALL {
        let (sorted, trace) = run_sort::<i32>(algorithm, &[]).unwrap();
        assert!(sorted.is_empty());
        assert!(trace.is_empty());

        let (sorted, trace) = run_sort(algorithm, &["only"]).unwrap();
        assert_eq!(sorted, vec!["only"]);
        assert!(trace.is_empty());
    }
}

/// Test run_sort fails fast on incomparable elements.
#[test]
fn test_run_sort_rejects_nan() {
    for algorithm in SortAlgorithm::ALL {
        let res = run_sort(algorithm, &[0.5, f64::NAN, 1.5]);
        assert!(matches!(res, Err(SortError::InvalidInput(_))), "{algorithm}");
    }
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test a generated sequence sorts and replays with every algorithm.
#[test]
fn test_generated_sequence_replays() {
    let input: Vec<i32> = SequenceGenerator::new(7).size(60).generate().unwrap();

    for algorithm in SortAlgorithm::ALL {
        let (sorted, trace) = run_sort(algorithm, &input).unwrap();
        assert_eq!(replay(&input, &trace).unwrap(), sorted, "{algorithm}");

        let states: Vec<_> = ReplayStates::new(&input, &trace).collect();
        assert_eq!(states.len(), trace.len());
    }
}

/// Test a playback session ends in the batch output.
#[test]
fn test_playback_matches_batch() {
    let input = vec![14, 3, 3, 9, -1, 0];
    let batch = SortTrace::new()
        .algorithm(Quick)
        .adapter(Batch)
        .build()
        .unwrap()
        .run(&input)
        .unwrap();

    let mut session = SortTrace::new()
        .algorithm(Quick)
        .adapter(Playback)
        .build()
        .unwrap()
        .load(&input)
        .unwrap();

    let mut frames = 0;
    while session.step().is_some() {
        frames += 1;
    }

    assert_eq!(frames, batch.trace.len());
    assert_eq!(session.current_state(), batch.sorted.as_slice());
    assert_eq!(session.trace(), &batch.trace);
}
