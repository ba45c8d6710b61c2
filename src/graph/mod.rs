//! Undirected weighted graphs on a fixed vertex capacity.
//!
//! [`Graph`] is an adjacency matrix whose two symmetric cells share one
//! [`Edge`], addressed by an [`EdgeId`]. Edges carry a [`Classification`]
//! that algorithms use to mark them; Kruskal's algorithm marks spanning-forest
//! edges [`Classification::Selected`].
//!
//! ```rust
//! use mstree::graph::{Classification, Graph};
//!
//! let mut g = Graph::new(3).unwrap();
//! g.add_edge(0, 1, 1.5, Classification::Unvisited).unwrap();
//! g.add_edge(2, 1, 0.5, Classification::Unvisited).unwrap();
//!
//! assert_eq!(g.degree(1), 2);
//! // Each undirected edge is enumerated once.
//! assert_eq!(g.edges().count(), 2);
//! ```

mod edge;
mod matrix;

pub use edge::{Classification, Edge, EdgeId};
pub use matrix::{Edges, Graph};
