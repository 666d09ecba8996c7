//! Textbook data structures and sorting routines.
//!
//! - [`stack::LinkedStack`]: LIFO stack over singly linked nodes
//! - [`tree::RecursiveBinarySearchTree`]: unbalanced binary search tree
//! - [`sorting`]: insertion, bubble and rotation-based merge sort, plus a
//!   timing harness in [`sorting::compare`]
//!
//! The components share nothing but the error type.

pub mod error;
pub mod sorting;
pub mod stack;
pub mod tree;

mod test_utils;

pub use error::{DsaError, Result};
pub use sorting::{SortAlgorithm, bubble_sort, insertion_sort, merge_sort};
pub use stack::{LinkedStack, Stack};
pub use tree::{BinarySearchTree, RecursiveBinarySearchTree};
