//! Sort algorithm selection.
//!
//! ## Purpose
//!
//! This module defines the set of traceable algorithms, their display names,
//! and the identifiers a front end uses to pick one.
//!
//! ## Key concepts
//!
//! * **Identifiers**: Parsing accepts camel-case selector ids (`bubbleSort`),
//!   kebab/snake forms (`bubble-sort`, `bubble_sort`), and short names (`bubble`).
//! * **Stability**: Merge and insertion sort never reorder equal elements.
//!
//! ## Non-goals
//!
//! * This module does not run any algorithm (see `engine::executor`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::str::FromStr;

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Sort Algorithm
// ============================================================================

/// Comparison sort whose operations are recorded into a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortAlgorithm {
    /// Adjacent-pair passes with a shrinking inner range, no early exit.
    #[default]
    Bubble,

    /// Lomuto partition with the last element as pivot.
    Quick,

    /// Top-down merge through an auxiliary buffer.
    Merge,

    /// Adjacent swaps walking each new element left.
    Insertion,
}

impl SortAlgorithm {
    /// Every supported algorithm, in selector order.
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Insertion,
    ];

    /// Human-readable name, e.g. "Bubble Sort".
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
            Self::Insertion => "Insertion Sort",
        }
    }

    /// Selector identifier, e.g. "bubbleSort".
    pub fn id(&self) -> &'static str {
        match self {
            Self::Bubble => "bubbleSort",
            Self::Quick => "quickSort",
            Self::Merge => "mergeSort",
            Self::Insertion => "insertionSort",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Merge | Self::Insertion)
    }
}

impl Display for SortAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "bubble" | "bubblesort" => Ok(Self::Bubble),
            "quick" | "quicksort" => Ok(Self::Quick),
            "merge" | "mergesort" => Ok(Self::Merge),
            "insertion" | "insertionsort" => Ok(Self::Insertion),
            _ => Err(SortError::InvalidInput(format!("unknown algorithm '{s}'"))),
        }
    }
}
