use std::fmt;

use slab::Slab;

use super::edge::{Classification, Edge, EdgeId};
use crate::error::{Error, Result};

type Row = Box<[Option<EdgeId>]>;

/// Undirected weighted graph stored as an adjacency matrix.
///
/// Vertex ids live in `0..capacity`. A vertex is present once its row has
/// been allocated, whether or not it has incident edges. Both cells `(i, j)`
/// and `(j, i)` of an edge hold the same [`EdgeId`]; the edge itself lives
/// exactly once in a slab, so removal and drop release it once.
#[derive(Debug, Clone)]
pub struct Graph {
    capacity: usize,
    rows: Vec<Option<Row>>,
    edges: Slab<Edge>,
}

impl Graph {
    /// Create an empty graph able to hold vertices `0..capacity`.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        let mut rows = Vec::new();
        rows.try_reserve_exact(capacity)
            .map_err(|_| Error::Allocation { what: "graph rows" })?;
        rows.resize(capacity, None);
        Ok(Self {
            capacity,
            rows,
            edges: Slab::new(),
        })
    }

    /// Maximum number of vertices (maximum vertex id + 1).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of present vertices. O(capacity).
    pub fn vertex_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_some()).count()
    }

    /// Whether no vertex is present.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.is_none())
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Ids of present vertices, in increasing order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(v, r)| r.as_ref().map(|_| v))
    }

    /// Whether `v` is present. Out-of-range ids are simply absent.
    pub fn has_vertex(&self, v: usize) -> bool {
        self.rows.get(v).is_some_and(|r| r.is_some())
    }

    /// Whether an edge connects `v1` and `v2`.
    pub fn has_edge(&self, v1: usize, v2: usize) -> bool {
        self.edge_id(v1, v2).is_some()
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.capacity {
            return Err(Error::VertexOutOfRange {
                vertex: v,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Make `v` present. Does nothing if it already is.
    pub fn add_vertex(&mut self, v: usize) -> Result<()> {
        self.check_vertex(v)?;
        if self.rows[v].is_none() {
            let mut row = Vec::new();
            row.try_reserve_exact(self.capacity)
                .map_err(|_| Error::Allocation { what: "graph row" })?;
            row.resize(self.capacity, None);
            self.rows[v] = Some(row.into_boxed_slice());
        }
        Ok(())
    }

    /// Connect `v1` and `v2`, adding either endpoint if missing.
    ///
    /// Fails without touching the graph if an endpoint is out of range, if
    /// `v1 == v2`, or if the pair is already connected.
    pub fn add_edge(
        &mut self,
        v1: usize,
        v2: usize,
        weight: f64,
        classification: Classification,
    ) -> Result<EdgeId> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        if v1 == v2 {
            return Err(Error::SelfLoop { vertex: v1 });
        }
        if self.has_edge(v1, v2) {
            return Err(Error::DuplicateEdge { v1, v2 });
        }
        self.add_vertex(v1)?;
        self.add_vertex(v2)?;

        let id = EdgeId(self.edges.insert(Edge::new(v1, v2, weight, classification)));
        self.set_cell(v1, v2, Some(id));
        self.set_cell(v2, v1, Some(id));
        Ok(id)
    }

    fn set_cell(&mut self, i: usize, j: usize, value: Option<EdgeId>) {
        if let Some(row) = self.rows[i].as_mut() {
            row[j] = value;
        }
    }

    /// Remove the edge between `v1` and `v2`. Returns whether one existed.
    pub fn remove_edge(&mut self, v1: usize, v2: usize) -> Result<bool> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        let Some(id) = self.edge_id(v1, v2) else {
            return Ok(false);
        };
        self.set_cell(v1, v2, None);
        self.set_cell(v2, v1, None);
        self.edges.try_remove(id.0);
        Ok(true)
    }

    /// Remove `v` and every incident edge. Returns whether `v` was present.
    pub fn remove_vertex(&mut self, v: usize) -> Result<bool> {
        self.check_vertex(v)?;
        if !self.has_vertex(v) {
            return Ok(false);
        }
        for u in 0..self.capacity {
            self.remove_edge(v, u)?;
        }
        self.rows[v] = None;
        Ok(true)
    }

    /// Number of edges incident to `v`; zero for absent vertices. O(capacity).
    pub fn degree(&self, v: usize) -> usize {
        match self.rows.get(v) {
            Some(Some(row)) => row.iter().filter(|c| c.is_some()).count(),
            _ => 0,
        }
    }

    /// Handle of the edge between `v1` and `v2`, if any.
    pub fn edge_id(&self, v1: usize, v2: usize) -> Option<EdgeId> {
        match (self.rows.get(v1), self.has_vertex(v2)) {
            (Some(Some(row)), true) => row[v2],
            _ => None,
        }
    }

    /// The edge between `v1` and `v2`, if any.
    pub fn edge(&self, v1: usize, v2: usize) -> Option<&Edge> {
        self.edge_id(v1, v2).and_then(|id| self.get(id))
    }

    /// Mutable access to the edge between `v1` and `v2`, if any.
    pub fn edge_mut(&mut self, v1: usize, v2: usize) -> Option<&mut Edge> {
        let id = self.edge_id(v1, v2)?;
        self.get_mut(id)
    }

    /// The edge behind a handle, or `None` if it was removed.
    pub fn get(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Mutable access to the edge behind a handle.
    pub fn get_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id.0)
    }

    /// Neighbors of `v` in increasing id order, with the connecting edge.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = (usize, EdgeId)> + '_ {
        self.rows
            .get(v)
            .and_then(Option::as_ref)
            .into_iter()
            .flat_map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(u, cell)| cell.map(|id| (u, id)))
            })
    }

    /// First edge in enumeration order, or `None` for an edgeless graph.
    ///
    /// Enumeration walks the strict lower triangle row by row: rows `i`
    /// ascending, columns `j < i` ascending. Every undirected edge is seen
    /// exactly once, and the order is stable while the graph is unchanged.
    pub fn first_edge(&self) -> Option<EdgeId> {
        self.scan_from(1, 0)
    }

    /// Edge following `id` in enumeration order.
    ///
    /// Returns `None` when `id` is the last edge or no longer exists.
    pub fn next_edge(&self, id: EdgeId) -> Option<EdgeId> {
        let (i, j) = self.get(id)?.canonical();
        if j + 1 < i {
            self.scan_from(i, j + 1)
        } else {
            self.scan_from(i + 1, 0)
        }
    }

    fn scan_from(&self, row: usize, col: usize) -> Option<EdgeId> {
        let mut col = col;
        for i in row..self.capacity {
            if let Some(cells) = self.rows[i].as_ref() {
                if let Some(id) = cells[col..i].iter().find_map(|c| *c) {
                    return Some(id);
                }
            }
            col = 0;
        }
        None
    }

    /// Iterate edges in enumeration order.
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            graph: self,
            next: self.first_edge(),
        }
    }
}

/// Iterator over the edges of a [`Graph`], each undirected edge once.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    graph: &'a Graph,
    next: Option<EdgeId>,
}

impl<'a> Iterator for Edges<'a> {
    type Item = (EdgeId, &'a Edge);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let edge = self.graph.get(id)?;
        self.next = self.graph.next_edge(id);
        Some((id, edge))
    }
}

impl fmt::Display for Graph {
    /// One line per present vertex, listing `(neighbor edge)` pairs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.vertices() {
            write!(f, "vertex {v:3}:")?;
            for (u, id) in self.neighbors(v) {
                if let Some(edge) = self.get(id) {
                    write!(f, " ({u} {edge})")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
