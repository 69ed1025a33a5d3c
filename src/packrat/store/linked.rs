use super::{RecordStore, Removed};
use crate::algorithms::{self, Lookup};
use crate::error::{PackratError, Result};
use crate::model::Record;
use std::fmt;

type Link = Option<Box<Node>>;

struct Node {
    record: Record,
    next: Link,
}

/// Singly linked record store with head insertion.
///
/// Traversal order is most recent first. Each node is owned by its
/// predecessor (the head by the store), so every node is released exactly
/// once, either when it is removed or when the store is cleared or dropped.
#[derive(Default)]
pub struct LinkedStore {
    head: Link,
    len: usize,
}

impl LinkedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links `record` in front of the current head. O(1).
    pub fn insert_front(&mut self, record: Record) {
        let node = Box::new(Node {
            record,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Head-to-tail snapshot.
    pub fn list(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }
}

impl RecordStore for LinkedStore {
    fn insert(&mut self, record: Record) -> Result<()> {
        self.insert_front(record);
        Ok(())
    }

    fn remove_by_name(&mut self, name: &str) -> Result<Removed> {
        let lookup = self.linear_search(name);
        let not_found = || PackratError::NotFound {
            key: name.to_string(),
            comparisons: lookup.comparisons,
        };
        let position = lookup.position.ok_or_else(not_found)?;

        let mut cursor = &mut self.head;
        for _ in 0..position {
            cursor = match cursor {
                Some(node) => &mut node.next,
                None => break,
            };
        }

        let mut node = cursor.take().ok_or_else(not_found)?;
        *cursor = node.next.take();
        self.len -= 1;
        Ok(Removed {
            record: node.record,
            position,
            comparisons: lookup.comparisons,
        })
    }

    fn linear_search(&self, name: &str) -> Lookup {
        algorithms::linear_search(self.iter(), |r| r.name.as_bytes().cmp(name.as_bytes()))
    }

    fn records(&self) -> Vec<Record> {
        self.list()
    }

    fn get(&self, position: usize) -> Option<&Record> {
        self.iter().nth(position)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        // Unlink one node at a time; dropping the head directly would recurse
        // once per node.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl Drop for LinkedStore {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for LinkedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.record
        })
    }
}
