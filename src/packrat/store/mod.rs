//! # Storage Layer
//!
//! Two containers hold records for a session, behind the [`RecordStore`]
//! trait so the command layer can insert, remove, list and scan without
//! knowing which one it talks to.
//!
//! ## Implementations
//!
//! - [`bounded::BoundedStore`]: array-backed
//!   - Fixed capacity, or doubling growth from an initial size
//!   - In-place sorts and binary search (guarded by a sorted-by-name flag)
//!
//! - [`linked::LinkedStore`]: singly linked
//!   - Head insertion, no capacity
//!   - Linear scan only; there is no sort or binary search on purpose, so the
//!     costs can be compared against the array
//!
//! Nothing is persisted. Both stores live for one session.

use crate::algorithms::Lookup;
use crate::error::Result;
use crate::model::Record;

pub mod bounded;
pub mod linked;

pub use bounded::{BoundedStore, Capacity, Hit, SortReport};
pub use linked::LinkedStore;

/// A record taken out of a store, with where it was and what finding it cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    pub record: Record,
    pub position: usize,
    pub comparisons: u64,
}

/// CRUD and linear-scan operations shared by both stores.
pub trait RecordStore {
    /// Adds a record (append for arrays, head insert for lists).
    fn insert(&mut self, record: Record) -> Result<()>;

    /// Removes the first record whose name equals `name`.
    fn remove_by_name(&mut self, name: &str) -> Result<Removed>;

    /// Scans for the first record whose name equals `name`.
    fn linear_search(&self, name: &str) -> Lookup;

    /// Snapshot of the records in traversal order.
    fn records(&self) -> Vec<Record>;

    /// Record at a traversal position.
    fn get(&self, position: usize) -> Option<&Record>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every record.
    fn clear(&mut self);
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Inserts one item per name, quantity counting up from 1.
    pub fn with_items<S: RecordStore>(mut store: S, names: &[&str]) -> S {
        for (i, name) in names.iter().enumerate() {
            store
                .insert(Record::item(*name, "misc", i as i32 + 1))
                .expect("fixture insert");
        }
        store
    }

    pub fn names<S: RecordStore>(store: &S) -> Vec<String> {
        store.records().into_iter().map(|r| r.name).collect()
    }
}
