//! Supporting containers for the spanning-forest algorithms.
//!
//! - [`DisjointSet`]: union-find with union by rank and full path compression.
//! - [`PriorityHeap`]: bounded binary heap ordered by a caller-supplied [`Relation`].
//! - [`BoundedQueue`]: fixed-capacity FIFO used by breadth-first traversal.

mod disjoint_set;
mod heap;
mod queue;

pub use disjoint_set::DisjointSet;
pub use heap::{Ascending, Descending, PriorityHeap, Relation};
pub use queue::BoundedQueue;
