use crate::error::Error;
use crate::graph::node::{NodeIndex, RoadNode};
use crate::graph::road::RoadWeight;
use crate::graph::{CrowFlyDistance, GetEdge, GetNode, GetNodeEdges};

/// wrapper to exclude a single directed edge from traversal during routing
pub struct ExcludeEdge<'a, G> {
    inner_graph: &'a G,
    excluded: (NodeIndex, NodeIndex),
}

impl<'a, G> ExcludeEdge<'a, G> {
    pub fn new(inner_graph: &'a G, origin: NodeIndex, destination: NodeIndex) -> Self {
        Self {
            inner_graph,
            excluded: (origin, destination),
        }
    }
}

impl<'a, G> GetNode for ExcludeEdge<'a, G>
where
    G: GetNode,
{
    fn get_node(&self, node: NodeIndex) -> Option<&RoadNode> {
        self.inner_graph.get_node(node)
    }
}

impl<'a, G> GetEdge for ExcludeEdge<'a, G>
where
    G: GetEdge,
{
    fn get_edge(&self, origin: NodeIndex, destination: NodeIndex) -> Option<RoadWeight> {
        if (origin, destination) == self.excluded {
            None
        } else {
            self.inner_graph.get_edge(origin, destination)
        }
    }
}

impl<'a, G> GetNodeEdges for ExcludeEdge<'a, G>
where
    G: GetNodeEdges,
{
    fn edges_originating_at(&self, node: NodeIndex) -> Vec<(NodeIndex, RoadWeight)> {
        let mut found = self.inner_graph.edges_originating_at(node);
        if node == self.excluded.0 {
            found.retain(|(destination, _)| *destination != self.excluded.1);
        }
        found
    }
}

impl<'a, G> CrowFlyDistance for ExcludeEdge<'a, G>
where
    G: CrowFlyDistance,
{
    fn crow_fly_distance_between(&self, a: NodeIndex, b: NodeIndex) -> Result<f64, Error> {
        self.inner_graph.crow_fly_distance_between(a, b)
    }

    fn max_road_speed(&self) -> f64 {
        self.inner_graph.max_road_speed()
    }
}
