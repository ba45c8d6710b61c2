use std::collections::VecDeque;

use crate::error::{Error, Result};

/// FIFO queue with a capacity fixed at creation.
///
/// `put` on a full queue drops the item and reports it; `get` on an empty
/// queue returns `None`.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue holding at most `capacity` items.
    pub fn new(capacity: usize) -> Result<Self> {
        let mut items = VecDeque::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| Error::Allocation { what: "queue" })?;
        Ok(Self { items, capacity })
    }

    /// Append `item`. Returns `false` (and drops it) if the queue is full.
    pub fn put(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push_back(item);
        true
    }

    /// Remove the oldest item.
    pub fn get(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut q = BoundedQueue::new(3).unwrap();
        assert!(q.put(1));
        assert!(q.put(2));
        assert_eq!(q.get(), Some(1));
        assert!(q.put(3));
        assert_eq!(q.get(), Some(2));
        assert_eq!(q.get(), Some(3));
        assert_eq!(q.get(), None);
    }

    #[test]
    fn put_drops_when_full() {
        let mut q = BoundedQueue::new(2).unwrap();
        assert!(q.put('a'));
        assert!(q.put('b'));
        assert!(!q.put('c'));
        assert_eq!(q.len(), 2);
        assert_eq!(q.get(), Some('a'));
        assert!(q.put('d'));
        assert_eq!(q.get(), Some('b'));
        assert_eq!(q.get(), Some('d'));
        assert!(q.is_empty());
    }
}
