#![cfg(feature = "dev")]
//! Tests for the primitive building blocks.
//!
//! These tests verify:
//! - Trace events and the trace container
//! - The traced working sequence
//! - The merge buffer
//! - The seeded sequence generator
//!
//! ## Test Organization
//!
//! 1. **Trace Events** - Predicates, indices, display
//! 2. **Trace Container** - Counting, indexing, iteration
//! 3. **Traced Sequence** - Recording of compares, swaps, placements
//! 4. **Merge Buffer** - Offset addressing, reuse
//! 5. **Generator** - Determinism, bounds, errors

use sortrace::internals::primitives::buffer::MergeBuffer;
use sortrace::internals::primitives::errors::SortError;
use sortrace::internals::primitives::generator::{
    SequenceGenerator, DEFAULT_LEN, DEFAULT_MAX, DEFAULT_MIN,
};
use sortrace::internals::primitives::sequence::TracedSequence;
use sortrace::internals::primitives::trace::{Trace, TraceEvent};

// ============================================================================
// Trace Event Tests
// ============================================================================

/// Test event predicates and indices.
#[test]
fn test_event_predicates() {
    let compare: TraceEvent<i32> = TraceEvent::Compare { i: 1, j: 2 };
    let swap = TraceEvent::Swap {
        i: 3,
        value_i: 10,
        j: 4,
        value_j: 20,
    };
    let noop: TraceEvent<i32> = TraceEvent::NoOp;

    assert!(compare.is_compare() && !compare.is_resolution());
    assert!(swap.is_swap() && swap.is_resolution());
    assert!(noop.is_noop() && noop.is_resolution());

    assert_eq!(compare.indices(), Some((1, 2)));
    assert_eq!(swap.indices(), Some((3, 4)));
    assert_eq!(noop.indices(), None);
}

/// Test event display.
#[test]
fn test_event_display() {
    let swap = TraceEvent::Swap {
        i: 0,
        value_i: 1.5,
        j: 2,
        value_j: -3.0,
    };

    assert_eq!(TraceEvent::<u8>::Compare { i: 0, j: 1 }.to_string(), "Compare(0, 1)");
    assert_eq!(swap.to_string(), "Swap(0 <- 1.5, 2 <- -3)");
    assert_eq!(TraceEvent::<u8>::NoOp.to_string(), "NoOp");
}

// ============================================================================
// Trace Container Tests
// ============================================================================

/// Test counting, indexing, and iteration.
#[test]
fn test_trace_container() {
    let trace = Trace::from(vec![
        TraceEvent::Compare { i: 0, j: 1 },
        TraceEvent::NoOp,
        TraceEvent::Compare { i: 1, j: 2 },
        TraceEvent::Swap {
            i: 1,
            value_i: 'a',
            j: 2,
            value_j: 'b',
        },
    ]);

    assert_eq!(trace.len(), 4);
    assert!(!trace.is_empty());
    assert_eq!(trace.comparisons(), 2);
    assert_eq!(trace.swaps(), 1);
    assert_eq!(trace[1], TraceEvent::NoOp);
    assert_eq!(trace.get(4), None);
    assert_eq!((&trace).into_iter().filter(|e| e.is_noop()).count(), 1);

    let events = trace.clone().into_events();
    assert_eq!(events.len(), 4);
    assert_eq!(trace.into_iter().count(), 4);
}

/// Test empty traces.
#[test]
fn test_trace_empty() {
    let trace: Trace<i32> = Trace::default();
    assert!(trace.is_empty());
    assert_eq!(trace, Trace::with_capacity(16));
}

// ============================================================================
// Traced Sequence Tests
// ============================================================================

/// Test comparisons record events without changing data.
#[test]
fn test_sequence_compare() {
    let mut data = vec![4, 2];
    let mut seq = TracedSequence::new(&mut data);

    assert!(seq.compare_gt(0, 1));
    seq.noop();
    assert!(!seq.compare_lt(0, 1));
    seq.noop();

    assert_eq!(seq.as_slice(), &[4, 2]);
    assert_eq!(seq.trace().len(), 4);
    assert_eq!(seq.trace().comparisons(), 2);
}

/// Test swaps record post-swap values, including self-swaps.
#[test]
fn test_sequence_swap() {
    let mut data = vec![1, 2, 3];
    let mut seq = TracedSequence::new(&mut data);

    seq.swap(0, 2);
    seq.swap(1, 1);
    let trace = seq.finish();

    assert_eq!(data, vec![3, 2, 1]);
    assert_eq!(
        trace.events(),
        &[
            TraceEvent::Swap {
                i: 0,
                value_i: 3,
                j: 2,
                value_j: 1
            },
            TraceEvent::Swap {
                i: 1,
                value_i: 2,
                j: 1,
                value_j: 2
            },
        ]
    );
}

/// Test placements record the destination value and the source's current value.
#[test]
fn test_sequence_place() {
    let mut data = vec![5, 6, 7];
    let mut seq = TracedSequence::with_capacity(&mut data, 4);

    seq.place(0, 9, 2);
    assert_eq!(*seq.get(0), 9);
    assert_eq!(seq.len(), 3);
    let trace = seq.finish();

    assert_eq!(data, vec![9, 6, 7]);
    assert_eq!(
        trace[0],
        TraceEvent::Swap {
            i: 0,
            value_i: 9,
            j: 2,
            value_j: 7
        }
    );
}

// ============================================================================
// Merge Buffer Tests
// ============================================================================

/// Test values are addressed by their sequence index.
#[test]
fn test_buffer_offset_addressing() {
    let mut buffer = MergeBuffer::with_capacity(8);
    assert!(buffer.is_empty());

    buffer.load(&[10, 20, 30], 4);
    assert_eq!(buffer.len(), 3);
    assert_eq!(*buffer.value(4), 10);
    assert_eq!(*buffer.value(6), 30);

    buffer.load(&[1], 0);
    assert_eq!(buffer.len(), 1);
    assert_eq!(*buffer.value(0), 1);
    assert!(buffer.capacity() >= 8);
}

// ============================================================================
// Generator Tests
// ============================================================================

/// Test defaults.
#[test]
fn test_generator_defaults() {
    let mut generator = SequenceGenerator::new(1);
    assert_eq!(generator.sequence_len(), DEFAULT_LEN);
    assert_eq!(generator.bounds(), (DEFAULT_MIN, DEFAULT_MAX));

    let values: Vec<i64> = generator.generate().unwrap();
    assert_eq!(values.len(), 100);
    assert!(values.iter().all(|v| (5..=500).contains(v)));
}

/// Test identical seeds produce identical sequences.
#[test]
fn test_generator_deterministic() {
    let a: Vec<u32> = SequenceGenerator::new(42).size(50).generate().unwrap();
    let b: Vec<u32> = SequenceGenerator::new(42).size(50).generate().unwrap();
    let c: Vec<u32> = SequenceGenerator::new(43).size(50).generate().unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

/// Test successive draws continue the stream.
#[test]
fn test_generator_stream_continues() {
    let mut generator = SequenceGenerator::new(9).size(20);
    let first: Vec<i32> = generator.generate().unwrap();
    let second: Vec<i32> = generator.generate().unwrap();

    assert_ne!(first, second);
}

/// Test custom and degenerate ranges.
#[test]
fn test_generator_ranges() {
    let values: Vec<i16> = SequenceGenerator::new(3)
        .size(200)
        .range(-3, 3)
        .generate()
        .unwrap();
    assert!(values.iter().all(|v| (-3..=3).contains(v)));
    assert!(values.contains(&-3) && values.contains(&3));

    let values: Vec<f64> = SequenceGenerator::new(3)
        .size(5)
        .range(7, 7)
        .generate()
        .unwrap();
    assert_eq!(values, vec![7.0; 5]);

    let values: Vec<i64> = SequenceGenerator::new(3)
        .size(10)
        .range(i64::MIN, i64::MAX)
        .generate()
        .unwrap();
    assert_eq!(values.len(), 10);
}

/// Test one seed yields the same values in every numeric target type.
#[test]
fn test_generator_target_types() {
    let wide: Vec<i64> = SequenceGenerator::new(21)
        .size(64)
        .range(0, 200)
        .generate()
        .unwrap();
    let narrow: Vec<u8> = SequenceGenerator::new(21)
        .size(64)
        .range(0, 200)
        .generate()
        .unwrap();
    let float: Vec<f32> = SequenceGenerator::new(21)
        .size(64)
        .range(0, 200)
        .generate()
        .unwrap();

    for ((&w, &n), &f) in wide.iter().zip(&narrow).zip(&float) {
        assert_eq!(w, i64::from(n));
        assert_eq!(w as f32, f);
    }
}

/// Test generator errors.
#[test]
fn test_generator_errors() {
    let res = SequenceGenerator::new(0).range(10, 1).generate::<i32>();
    assert_eq!(res, Err(SortError::InvalidRange { min: 10, max: 1 }));

    let res = SequenceGenerator::new(0).range(-5, -1).generate::<u8>();
    assert!(matches!(res, Err(SortError::InvalidInput(_))));
}
