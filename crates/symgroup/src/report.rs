//! One record per classified map.

use std::fmt;

use serde::Serialize;

use crate::classify::{Classification, PointGroup};
use crate::plane_map::PlaneMap;

/// Result line for graph number `graph` (1-based position in the input).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub graph: usize,
    pub group: PointGroup,
    pub order: usize,
    pub reversing: usize,
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
}

impl Report {
    pub fn new(graph: usize, map: &PlaneMap, classification: &Classification) -> Self {
        Self {
            graph,
            group: classification.group,
            order: classification.order,
            reversing: classification.reversing,
            vertices: map.num_vertices(),
            edges: map.num_edges(),
            faces: map.num_faces(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph {} has group {}", self.graph, self.group)
    }
}
