#![cfg(feature = "dev")]
//! Tests for input and trace validation utilities.
//!
//! These tests verify the validation functions used before and after a run:
//! - Element comparability and length limits
//! - Trace pairing and index bounds
//! - Replay comparison and playback seeks
//! - Builder duplicate detection
//!
//! ## Test Organization
//!
//! 1. **Input Validation** - Comparability, length
//! 2. **Trace Validation** - Pairing, bounds
//! 3. **Replay and Seek** - Mismatch detection, seek limits
//! 4. **Error Messages** - Display output

use sortrace::internals::engine::validator::Validator;
use sortrace::internals::primitives::errors::SortError;
use sortrace::internals::primitives::trace::{Trace, TraceEvent};

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test empty and single-element sequences are valid.
#[test]
fn test_validate_sequence_trivial() {
    let empty: [f64; 0] = [];
    assert_eq!(Validator::validate_sequence(&empty), Ok(()));
    assert_eq!(Validator::validate_sequence(&[1.5]), Ok(()));
}

/// Test NaN is rejected with its index.
#[test]
fn test_validate_sequence_nan() {
    let data = [1.0, 2.0, f64::NAN, 0.5];
    let res = Validator::validate_sequence(&data);

    match res {
        Err(SortError::InvalidInput(msg)) => assert!(msg.contains("index 2"), "{msg}"),
        other => panic!("NaN should be rejected, got {:?}", other),
    }
}

/// Test infinities are comparable and accepted.
#[test]
fn test_validate_sequence_infinity() {
    let data = [f64::INFINITY, f64::NEG_INFINITY, 0.0];
    assert_eq!(Validator::validate_sequence(&data), Ok(()));
}

/// Test the optional length limit.
#[test]
fn test_validate_len() {
    assert_eq!(Validator::validate_len(10, None), Ok(()));
    assert_eq!(Validator::validate_len(10, Some(10)), Ok(()));
    assert_eq!(
        Validator::validate_len(11, Some(10)),
        Err(SortError::SequenceTooLong { got: 11, max: 10 })
    );
}

// ============================================================================
// Trace Validation Tests
// ============================================================================

/// Test a well-formed trace passes.
#[test]
fn test_validate_trace_valid() {
    let trace = Trace::from(vec![
        TraceEvent::Compare { i: 0, j: 1 },
        TraceEvent::Swap {
            i: 0,
            value_i: 1,
            j: 1,
            value_j: 2,
        },
        TraceEvent::Compare { i: 1, j: 2 },
        TraceEvent::NoOp,
        // Placements may appear without a comparison.
        TraceEvent::Swap {
            i: 2,
            value_i: 3,
            j: 2,
            value_j: 3,
        },
    ]);

    assert_eq!(Validator::validate_trace(&trace, 3), Ok(()));
}

/// Test a Compare at the end of the trace is unpaired.
#[test]
fn test_validate_trace_trailing_compare() {
    let trace: Trace<i32> = Trace::from(vec![
        TraceEvent::Compare { i: 0, j: 1 },
        TraceEvent::NoOp,
        TraceEvent::Compare { i: 0, j: 1 },
    ]);

    assert_eq!(
        Validator::validate_trace(&trace, 2),
        Err(SortError::UnpairedCompare { step: 2 })
    );
}

/// Test two consecutive Compares are unpaired.
#[test]
fn test_validate_trace_double_compare() {
    let trace: Trace<i32> = Trace::from(vec![
        TraceEvent::Compare { i: 0, j: 1 },
        TraceEvent::Compare { i: 1, j: 2 },
        TraceEvent::NoOp,
    ]);

    assert_eq!(
        Validator::validate_trace(&trace, 3),
        Err(SortError::UnpairedCompare { step: 0 })
    );
}

/// Test out-of-range indices are reported with their step.
#[test]
fn test_validate_trace_out_of_bounds() {
    let trace = Trace::from(vec![
        TraceEvent::Compare { i: 0, j: 1 },
        TraceEvent::Swap {
            i: 0,
            value_i: 1,
            j: 5,
            value_j: 2,
        },
    ]);

    assert_eq!(
        Validator::validate_trace(&trace, 2),
        Err(SortError::IndexOutOfBounds {
            step: 1,
            index: 5,
            len: 2
        })
    );
}

// ============================================================================
// Replay and Seek Tests
// ============================================================================

/// Test replay comparison reports the first differing index.
#[test]
fn test_validate_replay() {
    assert_eq!(Validator::validate_replay(&[1, 2, 3], &[1, 2, 3]), Ok(()));
    assert_eq!(
        Validator::validate_replay(&[1, 3, 2], &[1, 2, 3]),
        Err(SortError::ReplayMismatch { index: 1 })
    );
    assert_eq!(
        Validator::validate_replay(&[1, 2], &[1, 2, 3]),
        Err(SortError::ReplayMismatch { index: 2 })
    );
}

/// Test seeks up to and including the trace length are valid.
#[test]
fn test_validate_seek() {
    assert_eq!(Validator::validate_seek(0, 0), Ok(()));
    assert_eq!(Validator::validate_seek(4, 4), Ok(()));
    assert_eq!(
        Validator::validate_seek(5, 4),
        Err(SortError::InvalidSeek { position: 5, len: 4 })
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert_eq!(Validator::validate_no_duplicates(None), Ok(()));
    assert_eq!(
        Validator::validate_no_duplicates(Some("algorithm")),
        Err(SortError::DuplicateParameter {
            parameter: "algorithm"
        })
    );
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test error messages name the offending values.
#[test]
fn test_error_display() {
    let err = SortError::SequenceTooLong { got: 11, max: 10 };
    assert!(err.to_string().contains("11"));
    assert!(err.to_string().contains("10"));

    let err = SortError::UnpairedCompare { step: 7 };
    assert!(err.to_string().contains("step 7"));

    let err = SortError::UnsupportedFeature {
        adapter: "Batch",
        feature: "start_at",
    };
    assert_eq!(
        err.to_string(),
        "Adapter 'Batch' does not support feature: start_at"
    );
}

/// Test errors implement std::error::Error.
#[test]
fn test_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(SortError::InvalidSeek {
        position: 3,
        len: 2,
    });
    assert!(err.to_string().contains("position 3"));
}
