use serde::Serialize;

pub use modifiers::ExcludeEdge;
pub use node::{NodeIndex, RoadNode};
pub use road::{RoadGraph, RoadGraphBuilder, RoadWeight};

pub mod modifiers;
pub mod node;
pub mod road;

use crate::error::Error;

#[derive(Serialize)]
pub struct GraphStats {
    pub num_nodes: usize,
    pub num_edges: usize,
}

pub trait GetStats {
    fn get_stats(&self) -> GraphStats;
}

pub trait GetNode {
    fn get_node(&self, node: NodeIndex) -> Option<&RoadNode>;

    fn contains_node(&self, node: NodeIndex) -> bool {
        self.get_node(node).is_some()
    }
}

/// Directed edge lookup by endpoint pair.
pub trait GetEdge {
    /// weight of the directed edge from `origin` to `destination`. `None`
    /// when no such edge exists; absence is not an error.
    fn get_edge(&self, origin: NodeIndex, destination: NodeIndex) -> Option<RoadWeight>;
}

pub trait GetNodeEdges {
    /// outgoing edges of `node` as `(destination, weight)` pairs.
    ///
    /// The returned order is the insertion order of the edges and stays
    /// stable for an unchanged graph, which makes tie-breaking between
    /// equally good paths deterministic.
    fn edges_originating_at(&self, node: NodeIndex) -> Vec<(NodeIndex, RoadWeight)>;
}

/// Geometric queries needed by heuristic-guided searches.
pub trait CrowFlyDistance {
    /// straight-line distance between the positions of two nodes, ignoring
    /// graph connectivity.
    fn crow_fly_distance_between(&self, a: NodeIndex, b: NodeIndex) -> Result<f64, Error>;

    /// upper bound on the traversal speed anywhere in the graph, in distance
    /// units per weight unit.
    fn max_road_speed(&self) -> f64;
}
