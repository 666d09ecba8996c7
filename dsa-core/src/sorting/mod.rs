//! In-place sorting routines.
//!
//! All three are generic over `T: Ord` and are used as an integer sorter
//! throughout the crate. None of them allocate.

pub mod compare;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DsaError;

/// Insertion sort. Stable, O(n²) worst case and O(n) on sorted input.
pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    debug!("Insertion sort over {} elements", values.len());

    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] > values[j] {
            values.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Bubble sort. Stable, always O(n²).
///
/// Runs one pass per element; after pass `k` the last `k + 1` slots hold their
/// final values and are left alone.
pub fn bubble_sort<T: Ord>(values: &mut [T]) {
    debug!("Bubble sort over {} elements", values.len());

    let len = values.len();
    for pass in 0..len {
        for j in 0..len - pass - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
            }
        }
    }
}

/// Top-down merge sort that merges without a scratch buffer.
///
/// Each out-of-order element of the right half is rotated into place, which
/// shifts the whole span between the two cursors. The split depth is O(log n)
/// but a merge can cost O(n²) moves, e.g. when every right element belongs in
/// front of the left half. Stable.
pub fn merge_sort<T: Ord>(values: &mut [T]) {
    debug!("Merge sort over {} elements", values.len());
    sort_halves(values);
}

fn sort_halves<T: Ord>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }

    // Left half takes the middle element, matching an inclusive midpoint split
    let split = (values.len() - 1) / 2 + 1;
    let (left, right) = values.split_at_mut(split);
    sort_halves(left);
    sort_halves(right);
    merge_by_rotation(values, split);
}

/// Merge the sorted runs `values[..split]` and `values[split..]` in place
fn merge_by_rotation<T: Ord>(values: &mut [T], split: usize) {
    let mut i = 0;
    let mut j = split;
    while i < j && j < values.len() {
        if values[i] > values[j] {
            values[i..=j].rotate_right(1);
            j += 1;
        }
        i += 1;
    }
}

/// Check if a slice is sorted in ascending order
pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Sorting routine selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Insertion,
    Bubble,
    Merge,
    /// Standard library stable sort, used as the reference ordering
    Std,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Bubble,
        SortAlgorithm::Merge,
        SortAlgorithm::Std,
    ];

    pub fn sort<T: Ord>(&self, values: &mut [T]) {
        match self {
            Self::Insertion => insertion_sort(values),
            Self::Bubble => bubble_sort(values),
            Self::Merge => merge_sort(values),
            Self::Std => values.sort(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::Bubble => "bubble",
            Self::Merge => "merge",
            Self::Std => "std",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = DsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insertion" => Ok(Self::Insertion),
            "bubble" => Ok(Self::Bubble),
            "merge" => Ok(Self::Merge),
            "std" | "reference" => Ok(Self::Std),
            other => Err(DsaError::Config(format!(
                "unknown sort algorithm: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
#[path = "sorting_test.rs"]
mod tests;
