//! Breadth-first traversal of the selected subgraph.
//!
//! After [`Kruskal`](super::Kruskal) has tagged the spanning-forest edges,
//! [`Bfs`] walks only [`Classification::Selected`] edges and records, for
//! every vertex, the vertex it was discovered from. Roots are taken in
//! increasing id order among present vertices, so each tree of the forest is
//! rooted at its smallest vertex.

use std::fmt;

use log::{debug, info};

use crate::collections::BoundedQueue;
use crate::error::Result;
use crate::graph::{Classification, Graph};

/// Parent of each vertex in the traversal forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentArray {
    parent: Vec<Option<usize>>,
    order: Vec<usize>,
}

impl ParentArray {
    /// Number of slots (the graph capacity).
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Parent of `v`, or `None` for roots, absent vertices and out-of-range ids.
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parent.get(v).copied().flatten()
    }

    /// Parent slots, indexed by vertex id.
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.parent
    }

    /// Vertices in the order they were visited.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Traversal roots, in increasing id order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.order
            .iter()
            .copied()
            .filter(|&v| self.parent[v].is_none())
    }

    /// Parent slots with `-1` standing for "no parent".
    pub fn as_signed(&self) -> Vec<i64> {
        self.parent
            .iter()
            .map(|p| p.map_or(-1, |u| u as i64))
            .collect()
    }
}

/// Breadth-first traversal over selected edges.
#[derive(Debug, Clone, Default)]
pub struct Bfs {
    verbose: bool,
}

impl Bfs {
    /// Create a traversal with tracing off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log every queue insertion and parent assignment at `info` level.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        if self.verbose {
            info!("bfs: {args}");
        }
    }

    /// Build the parent array of `graph`'s selected subgraph.
    pub fn run(&self, graph: &Graph) -> Result<ParentArray> {
        let capacity = graph.capacity();
        let mut parent = vec![None; capacity];
        let mut marked = vec![false; capacity];
        let mut order = Vec::with_capacity(capacity);
        let mut queue = BoundedQueue::new(capacity)?;

        for root in graph.vertices() {
            if marked[root] {
                continue;
            }
            self.trace(format_args!("visiting from {root}"));
            marked[root] = true;
            order.push(root);
            queue.put(root);

            while let Some(u) = queue.get() {
                for (k, id) in graph.neighbors(u) {
                    if marked[k] {
                        continue;
                    }
                    let selected = graph
                        .get(id)
                        .is_some_and(|e| e.classification() == Classification::Selected);
                    if !selected {
                        continue;
                    }
                    marked[k] = true;
                    parent[k] = Some(u);
                    order.push(k);
                    let queued = queue.put(k);
                    debug_assert!(queued, "queue sized to capacity cannot overflow");
                    self.trace(format_args!("queued {k}, parent[{k}] <= {u}"));
                }
            }
        }

        debug!("bfs: visited {} vertices", order.len());
        Ok(ParentArray { parent, order })
    }
}

/// Run [`Bfs`] with default settings.
pub fn bfs(graph: &Graph) -> Result<ParentArray> {
    Bfs::new().run(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mst::kruskal;

    fn graph(capacity: usize, edges: &[(usize, usize, f64)]) -> Graph {
        let mut g = Graph::new(capacity).unwrap();
        for &(a, b, w) in edges {
            g.add_edge(a, b, w, Classification::Unvisited).unwrap();
        }
        g
    }

    #[test]
    fn square_parents() {
        let mut g = graph(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (0, 3, 5.0)]);
        kruskal(&mut g).unwrap();
        let parents = Bfs::new().with_verbose(true).run(&g).unwrap();
        assert_eq!(parents.as_signed(), vec![-1, 0, 1, 2]);
        assert_eq!(parents.roots().collect::<Vec<_>>(), vec![0]);
        assert_eq!(parents.order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn two_triangles() {
        let mut g = graph(
            6,
            &[
                (0, 1, 1.0),
                (1, 2, 2.0),
                (2, 0, 3.0),
                (3, 4, 1.0),
                (4, 5, 1.0),
                (5, 3, 1.5),
            ],
        );
        kruskal(&mut g).unwrap();
        let parents = bfs(&g).unwrap();
        assert_eq!(parents.roots().collect::<Vec<_>>(), vec![0, 3]);
        for v in 0..3 {
            if let Some(p) = parents.parent(v) {
                assert!(p < 3);
            }
        }
        for v in 3..6 {
            if let Some(p) = parents.parent(v) {
                assert!((3..6).contains(&p));
            }
        }
        assert_eq!(parents.as_signed(), vec![-1, 0, 1, -1, 3, 4]);
    }

    #[test]
    fn unselected_edges_are_ignored() {
        // No Kruskal run: every edge is still unvisited.
        let g = graph(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        let parents = bfs(&g).unwrap();
        assert_eq!(parents.as_signed(), vec![-1, -1, -1]);
        assert_eq!(parents.roots().count(), 3);
    }

    #[test]
    fn absent_vertices_keep_no_parent() {
        let mut g = graph(5, &[(1, 3, 1.0)]);
        kruskal(&mut g).unwrap();
        let parents = bfs(&g).unwrap();
        assert_eq!(parents.as_signed(), vec![-1, -1, -1, 1, -1]);
        assert_eq!(parents.order(), &[1, 3]);
        assert_eq!(parents.parent(99), None);
    }

    #[test]
    fn parent_edges_are_selected_and_visited_first() {
        let mut g = graph(
            6,
            &[
                (0, 5, 2.0),
                (5, 4, 1.0),
                (4, 1, 3.0),
                (1, 2, 1.0),
                (2, 3, 2.0),
                (3, 0, 9.0),
                (0, 2, 4.0),
            ],
        );
        kruskal(&mut g).unwrap();
        let parents = bfs(&g).unwrap();
        let position = |v: usize| parents.order().iter().position(|&x| x == v).unwrap();
        for v in 0..6 {
            if let Some(p) = parents.parent(v) {
                assert_eq!(
                    g.edge(v, p).unwrap().classification(),
                    Classification::Selected
                );
                assert!(position(p) < position(v));
            }
        }
    }
}
