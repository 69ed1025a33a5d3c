//! # Algorithms
//!
//! Comparison sorts and searches over plain slices. Nothing here knows about
//! records or stores: callers pass a comparator, the routine returns a
//! comparison count alongside its result. The stores in [`crate::store`]
//! wrap these with record keys.

pub mod search;
pub mod sort;

pub use search::{binary_search, linear_search, Lookup};
pub use sort::{bubble_sort, insertion_sort, selection_sort, SortAlgorithm};
