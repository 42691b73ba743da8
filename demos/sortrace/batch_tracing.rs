//! Batch Tracing Examples
//!
//! This example demonstrates running traced sorts in batch mode:
//! - Basic tracing with minimal configuration
//! - Statistics and replay verification
//! - Comparing operation counts on presorted input
//! - Floating-point input and NaN rejection
//! - Sorting in place
//! - Larger generated inputs
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use sortrace::prelude::*;
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
fn main() -> Result<(), SortError> {
    println!("{}", "=".repeat(80));
    println!("sortrace Batch Tracing - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_trace()?;
    example_2_stats_and_verification()?;
    example_3_presorted_input()?;
    example_4_float_input()?;
    example_5_in_place()?;
    example_6_generated_input()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Basic Trace
/// Sorts a short sequence and prints every recorded event
fn example_1_basic_trace() -> Result<(), SortError> {
    println!("Example 1: Basic Trace");
    println!("{}", "-".repeat(80));

    let model = SortTrace::new().algorithm(Bubble).adapter(Batch).build()?;

    let result = model.run(&[5, 3, 8, 1])?;
    println!("{}", result);

    /* Expected Output:
    Summary:
      Algorithm:   Bubble Sort
      Elements:    4
      Steps:       12
      Input:       [5, 3, 8, 1]
      Sorted:      [1, 3, 5, 8]

    Trace:
        Step  Event
    ----------------------------------------
           0  Compare(0, 1)
           1  Swap(0 <- 3, 1 <- 5)
           2  Compare(1, 2)
           3  NoOp
           4  Compare(2, 3)
           5  Swap(2 <- 1, 3 <- 8)
           6  Compare(0, 1)
           7  NoOp
           8  Compare(1, 2)
           9  Swap(1 <- 1, 2 <- 5)
          10  Compare(0, 1)
          11  Swap(0 <- 1, 1 <- 3)
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Statistics and Verification
/// Counts operations and replays the trace before returning
fn example_2_stats_and_verification() -> Result<(), SortError> {
    println!("Example 2: Statistics and Verification");
    println!("{}", "-".repeat(80));

    let model = SortTrace::new()
        .algorithm(Merge)
        .return_stats()
        .verify_replay()
        .adapter(Batch)
        .build()?;

    let result = model.run(&[38, 27, 43, 3, 9, 82, 10])?;
    println!("{}", result);

    /* Expected Output:
    Summary:
      Algorithm:   Merge Sort
      Elements:    7
      Steps:       34
      Replay:      Verified
      Input:       [38, 27, 43, 3, 9, 82, 10]
      Sorted:      [3, 9, 10, 27, 38, 43, 82]

    Trace Statistics:
      Elements:     7
      Steps:        34
      Comparisons:  14
      Swaps:        20
      Self-swaps:   6
      No-ops:       0
      Swap ratio:   1.4286

    Trace:
        Step  Event
    ----------------------------------------
           0  Compare(0, 1)
           1  Swap(0 <- 27, 1 <- 27)
           2  Swap(1 <- 38, 0 <- 27)
           3  Compare(2, 3)
           4  Swap(2 <- 3, 3 <- 3)
           5  Swap(3 <- 43, 2 <- 3)
           6  Compare(0, 2)
           7  Swap(0 <- 3, 2 <- 3)
           8  Compare(0, 3)
           9  Swap(1 <- 27, 0 <- 3)
         ...
          24  Swap(1 <- 9, 4 <- 9)
          25  Compare(1, 5)
          26  Swap(2 <- 10, 5 <- 10)
          27  Compare(1, 6)
          28  Swap(3 <- 27, 1 <- 9)
          29  Compare(2, 6)
          30  Swap(4 <- 38, 2 <- 10)
          31  Compare(3, 6)
          32  Swap(5 <- 43, 3 <- 27)
          33  Swap(6 <- 82, 6 <- 82)
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Presorted Input
/// Shows how much work each algorithm does when nothing is out of order
fn example_3_presorted_input() -> Result<(), SortError> {
    println!("Example 3: Presorted Input");
    println!("{}", "-".repeat(80));

    let data = [1, 2, 3, 4, 5, 6];

    println!(
        "{:<16} {:>8} {:>12} {:>8} {:>12}",
        "Algorithm", "Steps", "Comparisons", "Swaps", "Self-swaps"
    );
    for algorithm in SortAlgorithm::ALL {
        let result = SortTrace::new()
            .algorithm(algorithm)
            .return_stats()
            .adapter(Batch)
            .build()?
            .run(&data)?;

        if let Some(stats) = result.stats {
            println!(
                "{:<16} {:>8} {:>12} {:>8} {:>12}",
                algorithm.name(),
                stats.steps,
                stats.comparisons,
                stats.swaps,
                stats.self_swaps
            );
        }
    }

    /* Expected Output:
    Algorithm           Steps  Comparisons    Swaps   Self-swaps
    Bubble Sort            30           15        0            0
    Quick Sort             35           15       20           20
    Merge Sort             25            9       16           16
    Insertion Sort         10            5        0            0
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Floating-Point Input
/// Floats sort like integers; NaN is rejected before any work is done
fn example_4_float_input() -> Result<(), SortError> {
    println!("Example 4: Floating-Point Input");
    println!("{}", "-".repeat(80));

    let (sorted, trace) = run_sort(Insertion, &[2.5, -1.0, 0.5])?;
    println!("Sorted: {:?}", sorted);
    for (step, event) in trace.iter().enumerate() {
        println!("{:>4}  {}", step, event);
    }

    match run_sort(Insertion, &[2.5, f64::NAN, 0.5]) {
        Ok(_) => println!("NaN input was accepted"),
        Err(err) => println!("Rejected: {}", err),
    }

    /* Expected Output:
    Sorted: [-1.0, 0.5, 2.5]
       0  Compare(0, 1)
       1  Swap(0 <- -1, 1 <- 2.5)
       2  Compare(1, 2)
       3  Swap(1 <- 0.5, 2 <- 2.5)
       4  Compare(0, 1)
       5  NoOp
    Rejected: Invalid input: element at index 1 is not comparable
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Sorting in Place
/// Sorts a caller-owned buffer and keeps only the trace
fn example_5_in_place() -> Result<(), SortError> {
    println!("Example 5: Sorting in Place");
    println!("{}", "-".repeat(80));

    let mut words = vec!["pear", "apple", "fig", "kiwi"];
    let model = SortTrace::new().algorithm(Quick).adapter(Batch).build()?;

    let trace = model.sort_in_place(&mut words)?;
    println!("Sorted: {:?}", words);
    println!("Events: {} ({} comparisons)", trace.len(), trace.comparisons());

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 6: Generated Input
/// Traces a larger random sequence and reports timing
fn example_6_generated_input() -> Result<(), SortError> {
    println!("Example 6: Generated Input");
    println!("{}", "-".repeat(80));

    let data: Vec<i64> = SequenceGenerator::new(42).size(2_000).generate()?;

    for algorithm in SortAlgorithm::ALL {
        let model = SortTrace::new()
            .algorithm(algorithm)
            .return_stats()
            .verify_replay()
            .adapter(Batch)
            .build()?;

        let start = Instant::now();
        let result = model.run(&data)?;
        let elapsed = start.elapsed();

        println!(
            "{:<16} {:>10} events  verified: {}  ({:.2?})",
            algorithm.name(),
            result.steps(),
            result.replay_verified,
            elapsed
        );
    }

    println!();
    Ok(())
}
