use std::fmt;

use geo_types::Coordinate;
use serde::{Deserialize, Serialize};

/// Stable index of a node within the arena of a
/// [`RoadGraph`](crate::graph::RoadGraph).
///
/// Indexes are only meaningful together with the graph that issued them;
/// the graph owns the node values, paths and search bookkeeping only hold
/// these indexes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeIndex(u32);

impl NodeIndex {
    pub(crate) fn new(raw: usize) -> Self {
        Self(raw as u32)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A geographic location in the road network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadNode {
    /// 2d position used for crow-fly distance computations.
    pub position: Coordinate<f64>,
}
