//! Kruskal's minimum spanning forest.
//!
//! # Algorithm
//!
//! 1. **Init**: one singleton set per present vertex, and a min-heap of edges
//!    keyed by weight, sized to the exact edge count.
//! 2. **Build**: enumerate every edge once, push it on the heap and mark it
//!    [`Classification::Rejected`].
//! 3. **Process**: pop edges lightest first. An edge whose endpoints lie in
//!    different sets is marked [`Classification::Selected`] and the sets are
//!    merged; any other edge would close a cycle and stays rejected.
//!
//! On a disconnected graph the result is one minimum spanning tree per
//! connected component. Ties in weight are broken by heap order, so with
//! repeated weights any one of the minimum forests may come out.
//!
//! # Complexity
//!
//! O(V² + E log E) time: enumeration scans the matrix, heap operations are
//! logarithmic, union-find is effectively constant.

use std::fmt;

use log::{debug, info};

use crate::collections::{DisjointSet, PriorityHeap};
use crate::error::Result;
use crate::graph::{Classification, EdgeId, Graph};

/// Stages of a Kruskal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Allocating the heap and the disjoint sets.
    Init,
    /// Filling the heap.
    Build,
    /// Selecting edges.
    Process,
    /// Every edge classified.
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Init => "init",
            Phase::Build => "build",
            Phase::Process => "process",
            Phase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Summary of a Kruskal run. The graph's edge tags hold the full result.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest {
    /// Selected edges, in the order they were accepted (non-decreasing weight).
    pub selected: Vec<EdgeId>,
    /// Number of rejected edges.
    pub rejected: usize,
    /// Sum of selected edge weights.
    pub total_weight: f64,
    /// Number of trees, i.e. connected components among present vertices.
    pub components: usize,
}

/// Kruskal's algorithm over a [`Graph`].
#[derive(Debug, Clone, Default)]
pub struct Kruskal {
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    id: EdgeId,
    weight: f64,
}

fn heavier_or_equal(a: &Candidate, b: &Candidate) -> bool {
    a.weight >= b.weight
}

impl Kruskal {
    /// Create a runner with tracing off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log every step at `info` level.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        if self.verbose {
            info!("kruskal: {args}");
        }
    }

    fn enter(&self, phase: Phase) {
        self.trace(format_args!("entering {phase}"));
    }

    /// Classify every edge of `graph` as selected or rejected.
    ///
    /// Allocation failure while setting up aborts before any edge is touched.
    pub fn run(&self, graph: &mut Graph) -> Result<SpanningForest> {
        self.enter(Phase::Init);
        let mut heap = PriorityHeap::new(graph.edge_count(), heavier_or_equal)?;
        let mut groups = DisjointSet::new(graph.capacity())?;
        let vertices: Vec<usize> = graph.vertices().collect();
        for v in vertices {
            groups.make_set(v)?;
        }

        self.enter(Phase::Build);
        let mut cursor = graph.first_edge();
        while let Some(id) = cursor {
            let Some(edge) = graph.get_mut(id) else {
                break;
            };
            heap.insert(Candidate {
                id,
                weight: edge.weight(),
            })?;
            edge.set_classification(Classification::Rejected);
            cursor = graph.next_edge(id);
        }

        self.enter(Phase::Process);
        let mut selected = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
        let mut rejected = 0;
        let mut total_weight = 0.0;
        while let Some(Candidate { id, weight }) = heap.extract_root() {
            let Some(edge) = graph.get_mut(id) else {
                continue;
            };
            let (v1, v2) = edge.endpoints();
            self.trace(format_args!("lightest edge: {edge}"));
            if groups.same_set(v1, v2)? {
                rejected += 1;
                continue;
            }
            edge.set_classification(Classification::Selected);
            groups.union(v1, v2)?;
            selected.push(id);
            total_weight += weight;
            self.trace(format_args!("selected, union {v1} U {v2}"));
        }

        self.enter(Phase::Done);
        let forest = SpanningForest {
            selected,
            rejected,
            total_weight,
            components: groups.set_count(),
        };
        debug!(
            "kruskal: {} selected, {} rejected, weight {}, {} component(s)",
            forest.selected.len(),
            forest.rejected,
            forest.total_weight,
            forest.components
        );
        Ok(forest)
    }
}

/// Run [`Kruskal`] with default settings.
pub fn kruskal(graph: &mut Graph) -> Result<SpanningForest> {
    Kruskal::new().run(graph)
}
