use std::fmt;

/// Classification tag carried by every edge.
///
/// Kruskal only moves edges from `Unvisited` to `Rejected` and then possibly
/// to `Selected`. `InProgress` and `Visited` are available to traversal
/// algorithms that color edges (grey/black in the usual terminology).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    /// Not yet looked at.
    #[default]
    Unvisited,
    /// Currently being explored.
    InProgress,
    /// Fully explored.
    Visited,
    /// Part of the spanning forest.
    Selected,
    /// Not part of the spanning forest.
    Rejected,
}

impl Classification {
    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Classification::Unvisited => "Unvisited",
            Classification::InProgress => "InProgress",
            Classification::Visited => "Visited",
            Classification::Selected => "Selected",
            Classification::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable handle to an edge stored in a [`Graph`](super::Graph).
///
/// Handles stay valid until the edge is removed. A removed edge's slot may be
/// reused by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Slot index in the graph's edge store.
    pub fn index(self) -> usize {
        self.0
    }
}

/// An undirected weighted edge.
///
/// Endpoints keep the orientation they were inserted with; equality of
/// undirected pairs goes through [`Edge::canonical`].
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    v1: usize,
    v2: usize,
    weight: f64,
    classification: Classification,
}

impl Edge {
    /// Create an edge between `v1` and `v2`.
    pub fn new(v1: usize, v2: usize, weight: f64, classification: Classification) -> Self {
        Self {
            v1,
            v2,
            weight,
            classification,
        }
    }

    /// First endpoint, as inserted.
    pub fn v1(&self) -> usize {
        self.v1
    }

    /// Second endpoint, as inserted.
    pub fn v2(&self) -> usize {
        self.v2
    }

    /// Both endpoints, as inserted.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.v1, self.v2)
    }

    /// Lower-triangle matrix coordinates: `(max(v1, v2), min(v1, v2))`.
    pub fn canonical(&self) -> (usize, usize) {
        if self.v1 >= self.v2 {
            (self.v1, self.v2)
        } else {
            (self.v2, self.v1)
        }
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint.
    pub fn other(&self, v: usize) -> Option<usize> {
        if v == self.v1 {
            Some(self.v2)
        } else if v == self.v2 {
            Some(self.v1)
        } else {
            None
        }
    }

    /// Edge weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Replace the edge weight.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Current classification tag.
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Replace the classification tag.
    pub fn set_classification(&mut self, classification: Classification) {
        self.classification = classification;
    }
}

impl fmt::Display for Edge {
    /// `v1 --(WW)--> v2<TAB>Label`, where `WW` is the weight truncated toward zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --({:02})--> {}\t{}",
            self.v1,
            self.weight.trunc() as i64,
            self.v2,
            self.classification
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_is_orientation_independent() {
        let a = Edge::new(2, 7, 1.0, Classification::Unvisited);
        let b = Edge::new(7, 2, 1.0, Classification::Unvisited);
        assert_eq!(a.canonical(), (7, 2));
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn other_endpoint() {
        let e = Edge::new(3, 5, 0.5, Classification::Unvisited);
        assert_eq!(e.other(3), Some(5));
        assert_eq!(e.other(5), Some(3));
        assert_eq!(e.other(4), None);
    }

    #[test]
    fn display_truncates_weight() {
        let mut e = Edge::new(0, 1, 7.9, Classification::Unvisited);
        e.set_classification(Classification::Selected);
        assert_eq!(e.to_string(), "0 --(07)--> 1\tSelected");

        e.set_weight(12.2);
        e.set_classification(Classification::Rejected);
        assert_eq!(e.to_string(), "0 --(12)--> 1\tRejected");
    }

    #[test]
    fn default_classification_is_unvisited() {
        assert_eq!(Classification::default(), Classification::Unvisited);
    }
}
