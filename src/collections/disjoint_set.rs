//! Union-find over a fixed universe `0..capacity`.
//!
//! Elements start unplaced. [`DisjointSet::make_set`] places an element as a
//! singleton; only placed elements take part in finds and unions. Unions are
//! by rank, finds rewrite every node on the path to point at the root, so a
//! sequence of m operations costs O(m α(n)).

use std::fmt;

use crate::error::{Error, Result};

/// Disjoint-set forest with union by rank and full path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// `None` for unplaced elements; a root is its own father.
    father: Vec<Option<usize>>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Create a universe of `capacity` unplaced elements.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        let mut father = Vec::new();
        father
            .try_reserve_exact(capacity)
            .map_err(|_| Error::Allocation { what: "disjoint set" })?;
        father.resize(capacity, None);
        let mut rank = Vec::new();
        rank.try_reserve_exact(capacity)
            .map_err(|_| Error::Allocation { what: "disjoint set" })?;
        rank.resize(capacity, 0);
        Ok(Self { father, rank })
    }

    /// Size of the universe.
    pub fn capacity(&self) -> usize {
        self.father.len()
    }

    fn check(&self, n: usize) -> Result<()> {
        if n >= self.father.len() {
            return Err(Error::ElementOutOfRange {
                element: n,
                capacity: self.father.len(),
            });
        }
        Ok(())
    }

    /// Whether `n` has been placed by [`make_set`](Self::make_set).
    pub fn is_placed(&self, n: usize) -> bool {
        self.father.get(n).is_some_and(Option::is_some)
    }

    /// Place `n` as the root of a singleton set with rank 0.
    ///
    /// Calling it again on an already placed element resets it to a
    /// singleton, which detaches it from its tree; callers place each
    /// element once.
    pub fn make_set(&mut self, n: usize) -> Result<()> {
        self.check(n)?;
        self.father[n] = Some(n);
        self.rank[n] = 0;
        Ok(())
    }

    /// Root of `n`'s set, or `None` if `n` was never placed.
    pub fn find_set(&mut self, n: usize) -> Result<Option<usize>> {
        self.check(n)?;
        let Some(root) = self.root_of(n) else {
            return Ok(None);
        };

        let mut node = n;
        while node != root {
            match self.father[node] {
                Some(next) => {
                    self.father[node] = Some(root);
                    node = next;
                }
                None => break,
            }
        }
        Ok(Some(root))
    }

    /// Walk to the root without compressing.
    fn root_of(&self, n: usize) -> Option<usize> {
        let mut node = self.father[n]?;
        while let Some(parent) = self.father[node] {
            if parent == node {
                break;
            }
            node = parent;
        }
        Some(node)
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `true` if two distinct sets were merged. Nothing happens if
    /// either element is unplaced or both already share a root. On equal
    /// ranks the root of `b` goes under the root of `a`.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        let (Some(ra), Some(rb)) = (self.find_set(a)?, self.find_set(b)?) else {
            return Ok(false);
        };
        if ra == rb {
            return Ok(false);
        }

        if self.rank[ra] < self.rank[rb] {
            self.father[ra] = Some(rb);
        } else {
            self.father[rb] = Some(ra);
            if self.rank[ra] == self.rank[rb] {
                self.rank[ra] += 1;
            }
        }
        Ok(true)
    }

    /// Whether `a` and `b` are both placed and share a root.
    pub fn same_set(&mut self, a: usize, b: usize) -> Result<bool> {
        let ra = self.find_set(a)?;
        let rb = self.find_set(b)?;
        Ok(matches!((ra, rb), (Some(x), Some(y)) if x == y))
    }

    /// Number of distinct sets among placed elements.
    pub fn set_count(&self) -> usize {
        self.father
            .iter()
            .enumerate()
            .filter(|(i, f)| **f == Some(*i))
            .count()
    }
}

impl fmt::Display for DisjointSet {
    /// `(element, root)` pairs for every placed element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for i in 0..self.father.len() {
            if let Some(root) = self.root_of(i) {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "({i}, {root})")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unplaced_elements_are_unset() {
        let mut ds = DisjointSet::new(4).unwrap();
        ds.make_set(0).unwrap();
        assert_eq!(ds.find_set(1).unwrap(), None);
        assert!(!ds.same_set(0, 1).unwrap());
        assert!(!ds.same_set(1, 1).unwrap());
        assert!(!ds.union(0, 1).unwrap());
        assert_eq!(ds.find_set(0).unwrap(), Some(0));
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut ds = DisjointSet::new(3).unwrap();
        assert!(matches!(
            ds.make_set(3),
            Err(Error::ElementOutOfRange {
                element: 3,
                capacity: 3
            })
        ));
        assert!(ds.find_set(7).is_err());
        assert!(ds.union(0, 3).is_err());
        assert!(ds.same_set(5, 0).is_err());
    }

    #[test]
    fn zero_capacity_rejected() {
        assert!(DisjointSet::new(0).is_err());
    }

    #[test]
    fn union_ties_attach_second_under_first() {
        let mut ds = DisjointSet::new(4).unwrap();
        for i in 0..4 {
            ds.make_set(i).unwrap();
        }
        assert!(ds.union(2, 3).unwrap());
        assert_eq!(ds.find_set(3).unwrap(), Some(2));
        assert_eq!(ds.rank[2], 1);

        // Lower rank goes under higher rank regardless of argument order.
        assert!(ds.union(0, 2).unwrap());
        assert_eq!(ds.find_set(0).unwrap(), Some(2));
        assert_eq!(ds.rank[2], 1);
    }

    #[test]
    fn union_is_transitive() {
        let mut ds = DisjointSet::new(6).unwrap();
        for i in 0..6 {
            ds.make_set(i).unwrap();
        }
        ds.union(0, 1).unwrap();
        ds.union(2, 3).unwrap();
        assert!(!ds.same_set(1, 3).unwrap());
        ds.union(1, 3).unwrap();
        assert!(ds.same_set(0, 2).unwrap());
        assert!(!ds.same_set(0, 4).unwrap());
        assert!(!ds.union(0, 3).unwrap());
        assert_eq!(ds.set_count(), 3);
    }

    #[test]
    fn find_compresses_whole_path() {
        let mut ds = DisjointSet::new(8).unwrap();
        // Chain 7 -> 6 -> ... -> 0.
        ds.father = vec![
            Some(0),
            Some(0),
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(5),
            Some(6),
        ];
        assert_eq!(ds.find_set(7).unwrap(), Some(0));
        assert!(ds.father.iter().all(|f| *f == Some(0)));
    }

    #[test]
    fn find_is_stable_across_calls() {
        let mut ds = DisjointSet::new(5).unwrap();
        for i in 0..5 {
            ds.make_set(i).unwrap();
        }
        ds.union(0, 1).unwrap();
        ds.union(2, 3).unwrap();
        ds.union(3, 1).unwrap();
        let first = ds.find_set(1).unwrap();
        for _ in 0..3 {
            assert_eq!(ds.find_set(1).unwrap(), first);
        }
    }

    #[test]
    fn display_lists_placed_elements() {
        let mut ds = DisjointSet::new(4).unwrap();
        ds.make_set(0).unwrap();
        ds.make_set(2).unwrap();
        ds.union(0, 2).unwrap();
        assert_eq!(ds.to_string(), "(0, 0) (2, 0)");
    }
}
