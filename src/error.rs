use thiserror::Error;

/// Errors returned by the graph structures and algorithms in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Capacity of zero requested for a structure that needs at least one slot.
    #[error("invalid capacity: must be at least 1")]
    InvalidCapacity,

    /// Vertex id does not fit in the graph.
    #[error("vertex {vertex} out of range: graph capacity is {capacity}")]
    VertexOutOfRange {
        /// Offending vertex id.
        vertex: usize,
        /// Graph capacity (maximum vertex id + 1).
        capacity: usize,
    },

    /// Element id does not fit in the disjoint-set universe.
    #[error("element {element} out of range: universe size is {capacity}")]
    ElementOutOfRange {
        /// Offending element id.
        element: usize,
        /// Universe size.
        capacity: usize,
    },

    /// Insert into a heap that is already at capacity.
    #[error("heap full: capacity is {capacity}")]
    HeapFull {
        /// Heap capacity.
        capacity: usize,
    },

    /// Edge from a vertex to itself.
    #[error("self-loop on vertex {vertex}")]
    SelfLoop {
        /// The vertex.
        vertex: usize,
    },

    /// An edge already connects the two vertices.
    #[error("edge ({v1}, {v2}) already exists")]
    DuplicateEdge {
        /// First endpoint.
        v1: usize,
        /// Second endpoint.
        v2: usize,
    },

    /// Storage for a component could not be reserved.
    #[error("allocation failed for {what}")]
    Allocation {
        /// Which component failed to allocate.
        what: &'static str,
    },

    /// Malformed text input.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Human-readable explanation.
        message: String,
    },

    /// Underlying I/O failure while reading or writing text.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
