//! Minimum spanning forests.
//!
//! [`Kruskal`] tags each edge of a [`Graph`](crate::graph::Graph) as selected
//! or rejected; [`Bfs`] then turns the selected edges into a parent array,
//! one tree per connected component.
//!
//! ## Usage
//!
//! ```rust
//! use mstree::graph::{Classification, Graph};
//! use mstree::mst::{Bfs, Kruskal};
//!
//! let mut g = Graph::new(4).unwrap();
//! g.add_edge(0, 1, 1.0, Classification::Unvisited).unwrap();
//! g.add_edge(1, 2, 2.0, Classification::Unvisited).unwrap();
//! g.add_edge(2, 3, 1.0, Classification::Unvisited).unwrap();
//! g.add_edge(0, 3, 5.0, Classification::Unvisited).unwrap();
//!
//! let forest = Kruskal::new().run(&mut g).unwrap();
//! assert_eq!(forest.total_weight, 4.0);
//! assert_eq!(g.edge(0, 3).unwrap().classification(), Classification::Rejected);
//!
//! let parents = Bfs::new().run(&g).unwrap();
//! assert_eq!(parents.as_signed(), vec![-1, 0, 1, 2]);
//! ```

mod bfs;
mod kruskal;

pub use bfs::{bfs, Bfs, ParentArray};
pub use kruskal::{kruskal, Kruskal, Phase, SpanningForest};
