//! In-place comparison sorts with comparison counting.
//!
//! Every routine takes a comparator and returns how many times it called it.
//! Swaps and element moves are not counted, so the numbers are comparable
//! across algorithms for the same input.

use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Insertion,
    Bubble,
    Selection,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
    ];

    /// Sorts `items` with this algorithm, returning the comparison count.
    pub fn sort_by<T, F>(self, items: &mut [T], compare: F) -> u64
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            SortAlgorithm::Insertion => insertion_sort(items, compare),
            SortAlgorithm::Bubble => bubble_sort(items, compare),
            SortAlgorithm::Selection => selection_sort(items, compare),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
        };
        f.write_str(label)
    }
}

/// Shifts each element left into the sorted prefix.
///
/// One comparison per step, including the comparison that stops the shift. A
/// shift that runs off the front of the slice ends without a final comparison.
pub fn insertion_sort<T, F>(items: &mut [T], mut compare: F) -> u64
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut comparisons = 0;
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if compare(&items[j - 1], &items[j]) == Ordering::Greater {
                items.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
    }
    comparisons
}

/// Adjacent-pair passes; stops after the first pass without a swap.
pub fn bubble_sort<T, F>(items: &mut [T], mut compare: F) -> u64
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    let mut comparisons = 0;
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            comparisons += 1;
            if compare(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    comparisons
}

/// Picks the smallest element of the unsorted suffix for each position.
///
/// "Smallest" is whatever the comparator puts first, so a reversed
/// comparator selects the maximum instead.
pub fn selection_sort<T, F>(items: &mut [T], mut compare: F) -> u64
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    let mut comparisons = 0;
    for i in 0..n.saturating_sub(1) {
        let mut best = i;
        for j in i + 1..n {
            comparisons += 1;
            if compare(&items[j], &items[best]) == Ordering::Less {
                best = j;
            }
        }
        if best != i {
            items.swap(i, best);
        }
    }
    comparisons
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted<T: Ord>(items: &[T]) -> bool {
        items.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn every_algorithm_sorts() {
        for algorithm in SortAlgorithm::ALL {
            let mut items = vec![5, 3, 9, 1, 1, 7, 0, -2];
            algorithm.sort_by(&mut items, |a, b| a.cmp(b));
            assert!(is_sorted(&items), "{algorithm} left {items:?}");
        }
    }

    #[test]
    fn empty_and_single_cost_nothing() {
        for algorithm in SortAlgorithm::ALL {
            let mut empty: Vec<i32> = vec![];
            assert_eq!(algorithm.sort_by(&mut empty, |a, b| a.cmp(b)), 0);
            let mut one = vec![1];
            assert_eq!(algorithm.sort_by(&mut one, |a, b| a.cmp(b)), 0);
        }
    }

    #[test]
    fn insertion_counts_the_stopping_comparison() {
        // placing "A" costs 1 comparison (runs off the front), placing "B" costs 2
        let mut items = vec!["C", "A", "B"];
        assert_eq!(insertion_sort(&mut items, |a, b| a.cmp(b)), 3);
        assert_eq!(items, vec!["A", "B", "C"]);
    }

    #[test]
    fn insertion_on_sorted_input_is_linear() {
        let mut items = vec![1, 2, 3, 4, 5];
        assert_eq!(insertion_sort(&mut items, |a, b| a.cmp(b)), 4);
    }

    #[test]
    fn insertion_on_reversed_input_is_quadratic() {
        let mut items = vec![5, 4, 3, 2, 1];
        assert_eq!(insertion_sort(&mut items, |a, b| a.cmp(b)), 10);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn insertion_is_stable() {
        let mut items = vec![("b", 1), ("a", 1), ("b", 2), ("a", 2), ("b", 3)];
        insertion_sort(&mut items, |x, y| x.0.cmp(y.0));
        assert_eq!(items, vec![("a", 1), ("a", 2), ("b", 1), ("b", 2), ("b", 3)]);
    }

    #[test]
    fn bubble_exits_after_a_clean_pass() {
        let mut sorted = vec![1, 2, 3, 4];
        assert_eq!(bubble_sort(&mut sorted, |a, b| a.cmp(b)), 3);

        let mut nearly = vec![2, 1, 3];
        assert_eq!(bubble_sort(&mut nearly, |a, b| a.cmp(b)), 3);
        assert_eq!(nearly, vec![1, 2, 3]);
    }

    #[test]
    fn bubble_on_reversed_input_runs_every_pass() {
        let mut items = vec![4, 3, 2, 1];
        assert_eq!(bubble_sort(&mut items, |a, b| a.cmp(b)), 6);
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn selection_always_scans_full_suffix() {
        let mut sorted = vec![1, 2, 3, 4];
        assert_eq!(selection_sort(&mut sorted, |a, b| a.cmp(b)), 6);
        let mut reversed = vec![4, 3, 2, 1];
        assert_eq!(selection_sort(&mut reversed, |a, b| a.cmp(b)), 6);
        assert_eq!(reversed, vec![1, 2, 3, 4]);
    }

    #[test]
    fn selection_with_reversed_comparator_picks_maximum() {
        let mut items = vec![3, 10, 1, 7];
        selection_sort(&mut items, |a, b| b.cmp(a));
        assert_eq!(items, vec![10, 7, 3, 1]);
    }
}
