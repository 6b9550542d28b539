use geo::algorithm::euclidean_distance::EuclideanDistance;
use geo_types::{Coordinate, Point};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::collections::RandomState;
use crate::error::Error;
use crate::graph::node::{NodeIndex, RoadNode};
use crate::graph::{
    CrowFlyDistance, GetEdge, GetNode, GetNodeEdges, GetStats, GraphStats,
};

/// Edge weight used throughout the crate: a totally ordered travel time.
pub type RoadWeight = OrderedFloat<f64>;

/// Weighted directed graph of geographic locations.
///
/// The graph is the sole owner of its nodes and edges; all other types refer
/// to nodes through their [`NodeIndex`]. It is built up once through
/// [`add_node`](RoadGraph::add_node) and [`add_edge`](RoadGraph::add_edge)
/// and treated as read-only by every search.
#[derive(Serialize, Deserialize, Clone)]
pub struct RoadGraph {
    nodes: Vec<RoadNode>,
    out_edges: Vec<SmallVec<[NodeIndex; 6]>>,
    edge_weights: IndexMap<(NodeIndex, NodeIndex), RoadWeight, RandomState>,
    max_road_speed: f64,
}

impl RoadGraph {
    /// `max_road_speed` is the upper bound on the traversal speed anywhere
    /// in the graph and must be positive. Edge weights added later are
    /// expected to be at least crow-fly-distance / `max_road_speed`,
    /// otherwise the A* heuristic loses its admissibility.
    pub fn new(max_road_speed: f64) -> Self {
        debug_assert!(max_road_speed > 0.0);
        Self {
            nodes: Default::default(),
            out_edges: Default::default(),
            edge_weights: Default::default(),
            max_road_speed,
        }
    }

    pub fn add_node(&mut self, position: Coordinate<f64>) -> NodeIndex {
        let index = NodeIndex::new(self.nodes.len());
        self.nodes.push(RoadNode { position });
        self.out_edges.push(SmallVec::new());
        index
    }

    /// Add a directed edge. Adding an edge between the same endpoint pair
    /// twice keeps the lower weight.
    pub fn add_edge(
        &mut self,
        origin: NodeIndex,
        destination: NodeIndex,
        weight: RoadWeight,
    ) -> Result<(), Error> {
        for node in [origin, destination] {
            if !self.contains_node(node) {
                return Err(Error::NodeNotInGraph(node));
            }
        }
        match self.edge_weights.entry((origin, destination)) {
            Occupied(mut e) => {
                // lower weight takes precedence
                if weight < *e.get() {
                    e.insert(weight);
                }
            }
            Vacant(e) => {
                e.insert(weight);
                self.out_edges[origin.index()].push(destination);
            }
        }
        Ok(())
    }

    pub fn add_edge_bidirectional(
        &mut self,
        origin: NodeIndex,
        destination: NodeIndex,
        weight: RoadWeight,
    ) -> Result<(), Error> {
        self.add_edge(origin, destination, weight)?;
        self.add_edge(destination, origin, weight)
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_weights.len()
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, RoadWeight)> + '_ {
        self.edge_weights
            .iter()
            .map(|((origin, destination), weight)| (*origin, *destination, *weight))
    }
}

impl GetNode for RoadGraph {
    fn get_node(&self, node: NodeIndex) -> Option<&RoadNode> {
        self.nodes.get(node.index())
    }
}

impl GetEdge for RoadGraph {
    fn get_edge(&self, origin: NodeIndex, destination: NodeIndex) -> Option<RoadWeight> {
        self.edge_weights.get(&(origin, destination)).copied()
    }
}

impl GetNodeEdges for RoadGraph {
    fn edges_originating_at(&self, node: NodeIndex) -> Vec<(NodeIndex, RoadWeight)> {
        self.out_edges
            .get(node.index())
            .map(|destinations| {
                destinations
                    .iter()
                    .filter_map(|destination| {
                        self.edge_weights
                            .get(&(node, *destination))
                            .map(|weight| (*destination, *weight))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl CrowFlyDistance for RoadGraph {
    fn crow_fly_distance_between(&self, a: NodeIndex, b: NodeIndex) -> Result<f64, Error> {
        let position_a = self.get_node(a).ok_or(Error::NodeNotInGraph(a))?.position;
        let position_b = self.get_node(b).ok_or(Error::NodeNotInGraph(b))?.position;
        Ok(Point::from(position_a).euclidean_distance(&Point::from(position_b)))
    }

    fn max_road_speed(&self) -> f64 {
        self.max_road_speed
    }
}

impl GetStats for RoadGraph {
    fn get_stats(&self) -> GraphStats {
        GraphStats {
            num_nodes: self.num_nodes(),
            num_edges: self.num_edges(),
        }
    }
}

/// Conversion seam for loaders building graphs from external map data.
pub trait RoadGraphBuilder {
    fn build_graph(self) -> Result<RoadGraph, Error>;
}
