//! Array-backed binary heap ordered by a caller-supplied relation.
//!
//! A relation `R(a, b)` answers "should `a` sink below `b`?". The heap keeps
//! `R(child, parent)` false for every node, so the root is the item no other
//! item wants to sit above. `a >= b` gives a min-heap, `a <= b` a max-heap.

use std::fmt;

use crate::error::{Error, Result};

/// Ordering relation used by [`PriorityHeap`].
pub trait Relation<T> {
    /// Whether `a` should be placed below `b`.
    fn sinks_below(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Relation<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn sinks_below(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest item at the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

impl<T: PartialOrd> Relation<T> for Ascending {
    fn sinks_below(&self, a: &T, b: &T) -> bool {
        a >= b
    }
}

/// Largest item at the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct Descending;

impl<T: PartialOrd> Relation<T> for Descending {
    fn sinks_below(&self, a: &T, b: &T) -> bool {
        a <= b
    }
}

/// Bounded binary heap.
///
/// Capacity is fixed at creation; inserting into a full heap fails and
/// leaves it unchanged.
#[derive(Clone)]
pub struct PriorityHeap<T, R> {
    items: Vec<T>,
    capacity: usize,
    relation: R,
}

impl<T, R: Relation<T>> PriorityHeap<T, R> {
    /// Create an empty heap holding at most `capacity` items.
    pub fn new(capacity: usize, relation: R) -> Result<Self> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| Error::Allocation { what: "heap" })?;
        Ok(Self {
            items,
            capacity,
            relation,
        })
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another insert would fail.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Peek at the root.
    pub fn root(&self) -> Option<&T> {
        self.items.first()
    }

    /// Held items in array (level) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Insert `item`, sifting it up toward the root.
    pub fn insert(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::HeapFull {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
        Ok(())
    }

    /// Remove and return the root, or `None` if empty.
    pub fn extract_root(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let root = self.items.swap_remove(0);
        self.sift_down(0);
        Some(root)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self
                .relation
                .sinks_below(&self.items[parent], &self.items[i])
            {
                break;
            }
            self.items.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            // Of the two children, pick the one the other would sink below.
            let right = left + 1;
            let mut next = left;
            if right < len
                && self
                    .relation
                    .sinks_below(&self.items[left], &self.items[right])
            {
                next = right;
            }
            if !self.relation.sinks_below(&self.items[i], &self.items[next]) {
                break;
            }
            self.items.swap(i, next);
            i = next;
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for PriorityHeap<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityHeap")
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}
