//! Minimum spanning forests on adjacency-matrix graphs.
//!
//! `mstree` is a small library built around Kruskal's algorithm and the
//! primitives it needs:
//! - [`graph`]: fixed-capacity undirected weighted graphs with tagged edges
//! - [`collections`]: union-find, a relation-ordered binary heap, a bounded queue
//! - [`mst`]: Kruskal's algorithm and a breadth-first parent array over its result
//! - [`io`]: the line-based text format used by the `mstree` binary

#![forbid(unsafe_code)]

pub mod collections;
pub mod error;
pub mod graph;
pub mod io;
pub mod mst;

pub use collections::{Ascending, BoundedQueue, Descending, DisjointSet, PriorityHeap, Relation};
pub use error::{Error, Result};
pub use graph::{Classification, Edge, EdgeId, Graph};
pub use mst::{Bfs, Kruskal, ParentArray, SpanningForest};
