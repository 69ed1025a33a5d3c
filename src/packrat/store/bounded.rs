use super::{RecordStore, Removed};
use crate::algorithms::{self, Lookup, SortAlgorithm};
use crate::error::{PackratError, Result};
use crate::model::{Record, SortKey, SortOrder};

/// How many records a [`BoundedStore`] may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// Inserts past `n` records fail with [`PackratError::Full`].
    Fixed(usize),
    /// Starts with `initial` slots and doubles whenever an insert needs more.
    Growable { initial: usize },
}

impl Capacity {
    pub fn limit(self) -> Option<usize> {
        match self {
            Capacity::Fixed(n) => Some(n),
            Capacity::Growable { .. } => None,
        }
    }

    fn initial_slots(self) -> usize {
        match self {
            Capacity::Fixed(n) => n,
            Capacity::Growable { initial } => initial.max(1),
        }
    }
}

/// A successful binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub index: usize,
    pub comparisons: u64,
}

/// What a sort did, for display next to the reordered records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    pub algorithm: SortAlgorithm,
    pub key: SortKey,
    pub order: SortOrder,
    pub comparisons: u64,
}

/// Array-backed record store.
///
/// Records stay in insertion order until a sort runs. The store remembers
/// whether its contents are ordered by name; only then is
/// [`binary_search`](Self::binary_search) allowed.
#[derive(Debug, Clone)]
pub struct BoundedStore {
    records: Vec<Record>,
    capacity: Capacity,
    slots: usize,
    sorted_by_name: bool,
}

impl BoundedStore {
    /// Nothing is allocated until the first insert, so a huge capacity costs
    /// nothing up front.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            records: Vec::new(),
            capacity,
            slots: capacity.initial_slots(),
            sorted_by_name: false,
        }
    }

    pub fn fixed(limit: usize) -> Self {
        Self::new(Capacity::Fixed(limit))
    }

    pub fn growable(initial: usize) -> Self {
        Self::new(Capacity::Growable { initial })
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Slots the store has room for. Equals the limit for fixed stores.
    pub fn slots(&self) -> usize {
        self.slots
    }

    pub fn is_full(&self) -> bool {
        self.capacity
            .limit()
            .is_some_and(|limit| self.records.len() >= limit)
    }

    pub fn is_sorted_by_name(&self) -> bool {
        self.sorted_by_name
    }

    /// Current contents in storage order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Linear scan comparing `key_fn(record)` against `key`.
    pub fn find_by<K, F>(&self, key_fn: F, key: &K) -> Lookup
    where
        K: Ord + ?Sized,
        F: Fn(&Record) -> &K,
    {
        algorithms::linear_search(&self.records, |r| key_fn(r).cmp(key))
    }

    /// Sorts in place by a record field.
    ///
    /// The sorted-by-name flag is set only for an ascending name sort.
    pub fn sort(&mut self, algorithm: SortAlgorithm, key: SortKey, order: SortOrder) -> SortReport {
        let comparisons =
            algorithm.sort_by(&mut self.records, |a, b| order.orient(key.compare(a, b)));
        self.sorted_by_name = key == SortKey::Name && order == SortOrder::Ascending;
        SortReport {
            algorithm,
            key,
            order,
            comparisons,
        }
    }

    /// Bisects by name. Fails with [`PackratError::Unsorted`] unless the last
    /// reordering was a name sort.
    pub fn binary_search(&self, name: &str) -> Result<Hit> {
        if !self.sorted_by_name {
            return Err(PackratError::Unsorted);
        }
        let lookup = algorithms::binary_search(&self.records, |r| {
            r.name.as_bytes().cmp(name.as_bytes())
        });
        match lookup.position {
            Some(index) => Ok(Hit {
                index,
                comparisons: lookup.comparisons,
            }),
            None => Err(PackratError::NotFound {
                key: name.to_string(),
                comparisons: lookup.comparisons,
            }),
        }
    }

    /// Doubles `slots` until `needed` fits, then makes the backing vector
    /// hold that many.
    fn reserve_for(&mut self, needed: usize) -> Result<()> {
        let mut slots = self.slots.max(1);
        while slots < needed {
            slots = slots.saturating_mul(2);
        }
        if self.records.capacity() < slots {
            self.records
                .try_reserve_exact(slots - self.records.len())?;
        }
        self.slots = slots;
        Ok(())
    }
}

impl RecordStore for BoundedStore {
    fn insert(&mut self, record: Record) -> Result<()> {
        match self.capacity {
            Capacity::Fixed(limit) if self.records.len() >= limit => {
                return Err(PackratError::Full { capacity: limit });
            }
            Capacity::Fixed(_) => {}
            Capacity::Growable { .. } => self.reserve_for(self.records.len() + 1)?,
        }
        self.records.push(record);
        self.sorted_by_name = false;
        Ok(())
    }

    fn remove_by_name(&mut self, name: &str) -> Result<Removed> {
        let lookup = self.linear_search(name);
        match lookup.position {
            Some(position) => Ok(Removed {
                // Vec::remove shifts the tail left, keeping its order
                record: self.records.remove(position),
                position,
                comparisons: lookup.comparisons,
            }),
            None => Err(PackratError::NotFound {
                key: name.to_string(),
                comparisons: lookup.comparisons,
            }),
        }
    }

    fn linear_search(&self, name: &str) -> Lookup {
        self.find_by(|r| r.name.as_bytes(), name.as_bytes())
    }

    fn records(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn clear(&mut self) {
        self.records.clear();
        self.sorted_by_name = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::{names, with_items};

    #[test]
    fn capacity_three_walkthrough() {
        let mut store = BoundedStore::fixed(3);
        store.insert(Record::item("A", "tool", 1)).unwrap();
        store.insert(Record::item("B", "tool", 2)).unwrap();
        store.insert(Record::item("C", "tool", 3)).unwrap();
        assert_eq!(store.len(), 3);

        let full = store.insert(Record::item("D", "tool", 4));
        assert!(matches!(full, Err(PackratError::Full { capacity: 3 })));

        let removed = store.remove_by_name("B").unwrap();
        assert_eq!(removed.record.quantity, 2);
        assert_eq!(names(&store), vec!["A", "C"]);

        assert!(matches!(store.binary_search("A"), Err(PackratError::Unsorted)));

        store.sort(SortAlgorithm::Insertion, SortKey::Name, SortOrder::Ascending);
        assert_eq!(names(&store), vec!["A", "C"]);

        let hit = store.binary_search("C").unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.comparisons, 2);
    }

    #[test]
    fn huge_fixed_capacity_allocates_lazily() {
        let mut store = BoundedStore::fixed(usize::MAX / 2);
        assert!(!store.is_full());
        store.insert(Record::item("a", "", 1)).unwrap();
        store.insert(Record::item("b", "", 2)).unwrap();
        assert_eq!(names(&store), vec!["a", "b"]);
        assert_eq!(store.slots(), usize::MAX / 2);
    }

    #[test]
    fn huge_growable_capacity_fails_with_allocation() {
        let mut store = BoundedStore::growable(usize::MAX / 2);
        let err = store.insert(Record::item("a", "", 1)).unwrap_err();
        assert!(matches!(err, PackratError::Allocation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn full_insert_leaves_contents_alone() {
        let mut store = with_items(BoundedStore::fixed(2), &["x", "y"]);
        assert!(store.is_full());
        let before = store.records();
        assert!(store.insert(Record::item("z", "", 0)).is_err());
        assert_eq!(store.records(), before);
    }

    #[test]
    fn missing_remove_reports_scan_cost_and_changes_nothing() {
        let mut store = with_items(BoundedStore::fixed(5), &["a", "b", "c"]);
        let before = store.records();
        match store.remove_by_name("zz") {
            Err(PackratError::NotFound { key, comparisons }) => {
                assert_eq!(key, "zz");
                assert_eq!(comparisons, 3);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(store.records(), before);
    }

    #[test]
    fn remove_takes_first_duplicate() {
        let mut store = BoundedStore::fixed(5);
        store.insert(Record::item("dup", "first", 1)).unwrap();
        store.insert(Record::item("dup", "second", 2)).unwrap();
        let removed = store.remove_by_name("dup").unwrap();
        assert_eq!(removed.record.category, "first");
        assert_eq!(removed.position, 0);
        assert_eq!(removed.comparisons, 1);
        assert_eq!(store.list()[0].category, "second");
    }

    #[test]
    fn length_tracks_inserts_minus_removes() {
        let mut store = BoundedStore::fixed(10);
        let mut expected = 0;
        for name in ["a", "b", "c", "d"] {
            store.insert(Record::item(name, "", 0)).unwrap();
            expected += 1;
        }
        for name in ["b", "nope", "d"] {
            if store.remove_by_name(name).is_ok() {
                expected -= 1;
            }
        }
        assert_eq!(store.len(), expected);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn every_algorithm_enables_binary_search() {
        for algorithm in SortAlgorithm::ALL {
            let mut store =
                with_items(BoundedStore::fixed(10), &["pear", "apple", "fig", "kiwi", "date"]);
            store.sort(algorithm, SortKey::Name, SortOrder::Ascending);
            assert!(store.is_sorted_by_name());
            assert!(store.list().windows(2).all(|w| w[0].name <= w[1].name));
            for name in ["apple", "date", "fig", "kiwi", "pear"] {
                let hit = store.binary_search(name).unwrap();
                assert_eq!(store.list()[hit.index].name, name);
            }
            assert!(matches!(
                store.binary_search("banana"),
                Err(PackratError::NotFound { .. })
            ));
        }
    }

    #[test]
    fn insert_clears_sorted_flag_but_remove_keeps_it() {
        let mut store = with_items(BoundedStore::fixed(10), &["b", "a", "c"]);
        store.sort(SortAlgorithm::Bubble, SortKey::Name, SortOrder::Ascending);
        store.remove_by_name("b").unwrap();
        assert!(store.is_sorted_by_name());
        store.insert(Record::item("d", "", 0)).unwrap();
        assert!(!store.is_sorted_by_name());
    }

    #[test]
    fn non_name_sorts_clear_the_flag() {
        let mut store = with_items(BoundedStore::fixed(10), &["b", "a"]);
        store.sort(SortAlgorithm::Selection, SortKey::Name, SortOrder::Ascending);
        store.sort(SortAlgorithm::Insertion, SortKey::Category, SortOrder::Ascending);
        assert!(!store.is_sorted_by_name());

        store.sort(SortAlgorithm::Selection, SortKey::Name, SortOrder::Descending);
        assert!(!store.is_sorted_by_name());
    }

    #[test]
    fn insertion_by_name_is_stable_and_counted() {
        let mut store = BoundedStore::fixed(10);
        store.insert(Record::item("C", "", 1)).unwrap();
        store.insert(Record::item("A", "", 2)).unwrap();
        store.insert(Record::item("B", "", 3)).unwrap();
        let report = store.sort(SortAlgorithm::Insertion, SortKey::Name, SortOrder::Ascending);
        assert_eq!(report.comparisons, 3);

        let mut store = BoundedStore::fixed(10);
        store.insert(Record::item("same", "", 1)).unwrap();
        store.insert(Record::item("a", "", 0)).unwrap();
        store.insert(Record::item("same", "", 2)).unwrap();
        store.insert(Record::item("same", "", 3)).unwrap();
        store.sort(SortAlgorithm::Insertion, SortKey::Name, SortOrder::Ascending);
        let quantities: Vec<i32> = store.list().iter().map(|r| r.quantity).collect();
        assert_eq!(quantities, vec![0, 1, 2, 3]);
    }

    #[test]
    fn selection_by_priority_descending() {
        let mut store = BoundedStore::fixed(10);
        store.insert(Record::component("chip", "core", 3)).unwrap();
        store.insert(Record::component("fan", "cooling", 9)).unwrap();
        store.insert(Record::component("bolt", "frame", 1)).unwrap();
        store.insert(Record::component("lens", "optics", 7)).unwrap();
        let report = store.sort(
            SortAlgorithm::Selection,
            SortKey::Priority,
            SortOrder::Descending,
        );
        assert_eq!(report.comparisons, 6);
        assert_eq!(names(&store), vec!["fan", "lens", "chip", "bolt"]);
    }

    #[test]
    fn find_by_other_keys() {
        let mut store = BoundedStore::fixed(10);
        store.insert(Record::prioritized("rope", "gear", 2, 4)).unwrap();
        store.insert(Record::prioritized("map", "paper", 1, 2)).unwrap();

        let by_category = store.find_by(|r| r.category.as_str(), "paper");
        assert_eq!(by_category.position, Some(1));
        assert_eq!(by_category.comparisons, 2);

        let by_priority = store.find_by(|r| &r.priority, &Some(4));
        assert_eq!(by_priority.position, Some(0));
        assert_eq!(by_priority.comparisons, 1);
    }

    #[test]
    fn growable_doubles_slots() {
        let mut store = BoundedStore::growable(2);
        assert_eq!(store.slots(), 2);
        for i in 0..5 {
            store.insert(Record::item(format!("r{i}"), "", i)).unwrap();
        }
        assert_eq!(store.len(), 5);
        assert_eq!(store.slots(), 8);
        assert!(!store.is_full());
        assert_eq!(store.capacity().limit(), None);
    }

    #[test]
    fn clear_empties_and_resets_flag() {
        let mut store = with_items(BoundedStore::fixed(4), &["b", "a"]);
        store.sort(SortAlgorithm::Bubble, SortKey::Name, SortOrder::Ascending);
        store.clear();
        assert!(store.is_empty());
        assert!(!store.is_sorted_by_name());
    }
}
