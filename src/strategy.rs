//! Sorting strategies.
//!
//! Every strategy sorts a slice of `i32` in place, ascending. The variants are
//! stateless, so one instance can be reused for any number of calls.

use crate::error::SortError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;
use std::str::FromStr;
use tracing::debug;

/// A replaceable sorting algorithm.
pub trait SortStrategy {
    /// Sorts `data` in place, ascending. Empty input is left untouched.
    fn sort(&self, data: &mut [i32]);

    fn name(&self) -> &str;
}

// ============================================================================
// Bubble sort
// ============================================================================

/// Naive O(n²) bubble sort: `n` full passes over the whole range, no early exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn sort(&self, data: &mut [i32]) {
        debug!(strategy = self.name(), len = data.len(), "sorting");
        let n = data.len();
        if n <= 1 {
            return;
        }

        for _ in 0..n {
            for j in 0..n - 1 {
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                }
            }
        }
    }

    fn name(&self) -> &str {
        "bubble sort"
    }
}

// ============================================================================
// Quick sort
// ============================================================================

/// Recursive quick sort with Lomuto partitioning around the last element.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl QuickSort {
    /// Recurses into the shorter partition and loops on the longer one, so the
    /// stack depth stays O(log n) even when every split is one-sided.
    fn quick_sort(mut data: &mut [i32]) {
        while data.len() > 1 {
            let pivot = Self::partition(data);
            let (left, right) = mem::take(&mut data).split_at_mut(pivot);
            // right[0] is the pivot, already in its final slot
            let right = &mut right[1..];
            if left.len() < right.len() {
                Self::quick_sort(left);
                data = right;
            } else {
                Self::quick_sort(right);
                data = left;
            }
        }
    }

    /// Moves every element `<= pivot` in front of it and returns the pivot's index.
    fn partition(data: &mut [i32]) -> usize {
        let high = data.len() - 1;
        let pivot = data[high];
        let mut i = 0;
        for j in 0..high {
            if data[j] <= pivot {
                data.swap(i, j);
                i += 1;
            }
        }
        data.swap(i, high);
        i
    }
}

impl SortStrategy for QuickSort {
    fn sort(&self, data: &mut [i32]) {
        debug!(strategy = self.name(), len = data.len(), "sorting");
        Self::quick_sort(data);
    }

    fn name(&self) -> &str {
        "quick sort"
    }
}

// ============================================================================
// Runtime selection
// ============================================================================

/// Names a built-in strategy so it can be picked from a flag or a config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Bubble,
    #[default]
    Quick,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Bubble, StrategyKind::Quick];

    pub fn build(self) -> Box<dyn SortStrategy> {
        match self {
            StrategyKind::Bubble => Box::new(BubbleSort),
            StrategyKind::Quick => Box::new(QuickSort),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Bubble => write!(f, "bubble"),
            StrategyKind::Quick => write!(f, "quick"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" | "bubblesort" | "bubble-sort" => Ok(StrategyKind::Bubble),
            "quick" | "quicksort" | "quick-sort" => Ok(StrategyKind::Quick),
            _ => Err(SortError::unknown_strategy(s.trim())),
        }
    }
}
