//! Playback Examples
//!
//! This example demonstrates stepping through a recorded run the way an
//! animation front end would:
//! - Stepping forward frame by frame
//! - Seeking and stepping back
//! - Starting a session part-way through
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use sortrace::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), SortError> {
    println!("{}", "=".repeat(80));
    println!("sortrace Playback - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_step_forward()?;
    example_2_seek_and_rewind()?;
    example_3_start_at()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Render a state as a row of bars, marking highlighted positions.
fn render(state: &[i32], highlight: Option<(usize, usize)>) -> String {
    state
        .iter()
        .enumerate()
        .map(|(k, &v)| {
            let bar = "#".repeat(v.max(0) as usize);
            match highlight {
                Some((i, j)) if k == i || k == j => format!("[{bar}]"),
                _ => format!(" {bar} "),
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

#[cfg(feature = "std")]
/// Example 1: Stepping Forward
/// Applies one event per frame and draws the state after it
fn example_1_step_forward() -> Result<(), SortError> {
    println!("Example 1: Stepping Forward");
    println!("{}", "-".repeat(80));

    let mut session = SortTrace::new()
        .algorithm(Quick)
        .adapter(Playback)
        .build()?
        .load(&[3, 1, 2])?;

    while let Some(frame) = session.step() {
        println!(
            "{:>3}  {:<24} {:?}",
            frame.step,
            frame.event.to_string(),
            frame.state
        );
    }

    /* Expected Output:
      0  Compare(0, 2)            [3, 1, 2]
      1  NoOp                     [3, 1, 2]
      2  Compare(1, 2)            [3, 1, 2]
      3  Swap(0 <- 1, 1 <- 3)     [1, 3, 2]
      4  Swap(1 <- 2, 2 <- 3)     [1, 2, 3]
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Seeking and Rewinding
/// Jumps to arbitrary steps using recorded snapshots
fn example_2_seek_and_rewind() -> Result<(), SortError> {
    println!("Example 2: Seeking and Rewinding");
    println!("{}", "-".repeat(80));

    let mut session = SortTrace::new()
        .algorithm(Insertion)
        .record_states()
        .adapter(Playback)
        .build()?
        .load(&[4, 1, 3, 2])?;

    session.seek(session.len() / 2)?;
    println!(
        "step {:>2}/{}  {}",
        session.position(),
        session.len(),
        render(session.current_state(), session.highlight())
    );

    session.step_back();
    println!(
        "step {:>2}/{}  {}",
        session.position(),
        session.len(),
        render(session.current_state(), session.highlight())
    );

    session.finish()?;
    println!(
        "step {:>2}/{}  {}",
        session.position(),
        session.len(),
        render(session.current_state(), session.highlight())
    );

    if session.seek(session.len() + 1).is_err() {
        println!("Seeking past the end is rejected");
    }

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Starting Part-Way
/// Opens a session already positioned at a given step
fn example_3_start_at() -> Result<(), SortError> {
    println!("Example 3: Starting Part-Way");
    println!("{}", "-".repeat(80));

    let session = SortTrace::new()
        .algorithm(Merge)
        .start_at(3)
        .adapter(Playback)
        .build()?
        .load(&[38, 27, 43, 3])?;

    println!("Position:  {}", session.position());
    println!("Remaining: {}", session.remaining());
    println!("State:     {:?}", session.current_state());
    println!("{}", session.stats());

    println!();
    Ok(())
}
