use std::cmp::Ordering;

/// Outcome of a search: where the match was (if anywhere) and what it cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lookup {
    pub position: Option<usize>,
    pub comparisons: u64,
}

/// Scans `items` front to back, one comparison per element visited.
///
/// `key_cmp` compares an element's key against the target; the first element
/// that compares `Equal` wins.
pub fn linear_search<I, F>(items: I, mut key_cmp: F) -> Lookup
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Ordering,
{
    let mut comparisons = 0;
    for (position, item) in items.into_iter().enumerate() {
        comparisons += 1;
        if key_cmp(item) == Ordering::Equal {
            return Lookup {
                position: Some(position),
                comparisons,
            };
        }
    }
    Lookup {
        position: None,
        comparisons,
    }
}

/// Bisects a slice already ordered by the key `key_cmp` inspects.
///
/// `key_cmp` returns how the element's key compares to the target. The range
/// is the closed interval `[lo, hi - 1]` with a floor midpoint, one
/// comparison per midpoint examined.
pub fn binary_search<T, F>(items: &[T], mut key_cmp: F) -> Lookup
where
    F: FnMut(&T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = items.len();
    let mut comparisons = 0;
    while lo < hi {
        let mid = lo + (hi - 1 - lo) / 2;
        comparisons += 1;
        match key_cmp(&items[mid]) {
            Ordering::Equal => {
                return Lookup {
                    position: Some(mid),
                    comparisons,
                };
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    Lookup {
        position: None,
        comparisons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_counts_each_visited_element() {
        let items = ["a", "b", "c", "b"];
        let hit = linear_search(items.iter(), |s| s.cmp(&"b"));
        assert_eq!(hit.position, Some(1));
        assert_eq!(hit.comparisons, 2);

        let miss = linear_search(items.iter(), |s| s.cmp(&"z"));
        assert_eq!(miss.position, None);
        assert_eq!(miss.comparisons, 4);
    }

    #[test]
    fn linear_on_empty_costs_nothing() {
        let items: [i32; 0] = [];
        assert_eq!(linear_search(items.iter(), |n| n.cmp(&1)), Lookup::default());
    }

    #[test]
    fn binary_finds_every_present_key() {
        let items = ["A", "B", "C", "D", "E", "F", "G"];
        for (i, key) in items.iter().enumerate() {
            let lookup = binary_search(&items, |s| s.cmp(key));
            assert_eq!(lookup.position, Some(i));
            assert!(lookup.comparisons <= 3);
        }
    }

    #[test]
    fn binary_checks_middle_first() {
        let items = ["A", "B", "C", "D", "E", "F", "G"];
        assert_eq!(binary_search(&items, |s| s.cmp(&"D")).comparisons, 1);
    }

    #[test]
    fn binary_uses_floor_midpoint() {
        // [A, C]: mid 0 checks A, then mid 1 checks C
        let items = ["A", "C"];
        let lookup = binary_search(&items, |s| s.cmp(&"C"));
        assert_eq!(lookup.position, Some(1));
        assert_eq!(lookup.comparisons, 2);
        assert_eq!(binary_search(&items, |s| s.cmp(&"A")).comparisons, 1);
    }

    #[test]
    fn binary_miss_exhausts_the_range() {
        let items = ["A", "B", "C", "D", "E", "F", "G"];
        let below = binary_search(&items, |s| s.cmp(&"0"));
        assert_eq!(below.position, None);
        assert_eq!(below.comparisons, 3);

        let above = binary_search(&items, |s| s.cmp(&"Z"));
        assert_eq!(above.position, None);
        assert_eq!(above.comparisons, 3);

        let empty: [&str; 0] = [];
        assert_eq!(binary_search(&empty, |s| s.cmp(&"A")), Lookup::default());
    }
}
