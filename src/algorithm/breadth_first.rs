//! Unweighted shortest-path search by hop count.

use crate::algorithm::frontier::{traverse, FifoFrontier};
use crate::algorithm::observer::{NoopObserver, SearchObserver};
use crate::algorithm::path::Path;
use crate::error::Error;
use crate::graph::node::NodeIndex;
use crate::graph::{GetNode, GetNodeEdges};

pub trait BreadthFirstSearch {
    /// Shortest path from `start` to `end` by the number of traversed
    /// edges. Edge weights do not influence the search; the returned path
    /// still carries the sum of the traversed edge weights as its cost.
    ///
    /// Ties between equally long paths are broken by discovery order, so
    /// repeated runs on an unchanged graph return the identical path.
    /// Returns the empty path when `end` is unreachable from `start` and
    /// the single-node path when `start == end`.
    fn breadth_first_search(&self, start: NodeIndex, end: NodeIndex) -> Result<Path, Error> {
        self.breadth_first_search_observed(start, end, &mut NoopObserver)
    }

    /// Like [`breadth_first_search`](BreadthFirstSearch::breadth_first_search),
    /// additionally notifying `observer` of node state transitions.
    fn breadth_first_search_observed(
        &self,
        start: NodeIndex,
        end: NodeIndex,
        observer: &mut dyn SearchObserver,
    ) -> Result<Path, Error>;
}

impl<G> BreadthFirstSearch for G
where
    G: GetNode + GetNodeEdges,
{
    fn breadth_first_search_observed(
        &self,
        start: NodeIndex,
        end: NodeIndex,
        observer: &mut dyn SearchObserver,
    ) -> Result<Path, Error> {
        let mut queue = FifoFrontier::default();
        // the FIFO queue ignores priorities
        traverse(self, start, end, &mut queue, |_, cost| Ok(cost), observer)
    }
}

#[cfg(test)]
mod tests {
    use geo_types::Coordinate;

    use crate::graph::node::NodeIndex;
    use crate::graph::{RoadGraph, RoadWeight};

    use super::BreadthFirstSearch;

    /// unit-cost square a-b-c-d-a
    fn square_graph() -> (RoadGraph, [NodeIndex; 4]) {
        let mut graph = RoadGraph::new(1.0);
        let a = graph.add_node(Coordinate::from((0.0, 0.0)));
        let b = graph.add_node(Coordinate::from((1.0, 0.0)));
        let c = graph.add_node(Coordinate::from((1.0, 1.0)));
        let d = graph.add_node(Coordinate::from((0.0, 1.0)));
        for (from, to) in [(a, b), (b, c), (c, d), (d, a)] {
            graph
                .add_edge_bidirectional(from, to, RoadWeight::from(1.0))
                .unwrap();
        }
        (graph, [a, b, c, d])
    }

    #[test]
    fn test_bfs_square() {
        let (graph, [a, _, c, _]) = square_graph();
        let path = graph.breadth_first_search(a, c).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.origin_node().unwrap(), a);
        assert_eq!(path.destination_node().unwrap(), c);
        assert_eq!(path.cost(), RoadWeight::from(2.0));
    }

    #[test]
    fn test_bfs_minimizes_hops_not_cost() {
        let mut graph = RoadGraph::new(1000.0);
        let a = graph.add_node(Coordinate::from((0.0, 0.0)));
        let b = graph.add_node(Coordinate::from((2.0, 0.0)));
        let c = graph.add_node(Coordinate::from((1.0, 1.0)));
        // one expensive direct edge vs. a cheap two-hop detour
        graph.add_edge(a, b, RoadWeight::from(10.0)).unwrap();
        graph.add_edge(a, c, RoadWeight::from(2.0)).unwrap();
        graph.add_edge(c, b, RoadWeight::from(2.0)).unwrap();

        let path = graph.breadth_first_search(a, b).unwrap();
        assert_eq!(path.nodes(), &[a, b]);
    }

    #[test]
    fn test_bfs_is_deterministic() {
        let (graph, [a, _, c, _]) = square_graph();
        let first = graph.breadth_first_search(a, c).unwrap();
        for _ in 0..10 {
            assert_eq!(graph.breadth_first_search(a, c).unwrap(), first);
        }
    }

    #[test]
    fn test_bfs_start_is_end() {
        let (graph, [a, ..]) = square_graph();
        let path = graph.breadth_first_search(a, a).unwrap();
        assert_eq!(path.nodes(), &[a]);
        assert_eq!(path.cost(), RoadWeight::from(0.0));
    }

    #[test]
    fn test_bfs_single_node_graph() {
        let mut graph = RoadGraph::new(1.0);
        let only = graph.add_node(Coordinate::from((0.0, 0.0)));
        let path = graph.breadth_first_search(only, only).unwrap();
        assert_eq!(path.nodes(), &[only]);
    }

    #[test]
    fn test_bfs_disconnected_components() {
        let mut graph = RoadGraph::new(1.0);
        let a = graph.add_node(Coordinate::from((0.0, 0.0)));
        let b = graph.add_node(Coordinate::from((1.0, 0.0)));
        let c = graph.add_node(Coordinate::from((10.0, 0.0)));
        let d = graph.add_node(Coordinate::from((11.0, 0.0)));
        graph
            .add_edge_bidirectional(a, b, RoadWeight::from(1.0))
            .unwrap();
        graph
            .add_edge_bidirectional(c, d, RoadWeight::from(1.0))
            .unwrap();

        assert!(graph.breadth_first_search(a, c).unwrap().is_empty());
    }

    #[test]
    fn test_bfs_unknown_node_is_an_error() {
        let (graph, [a, ..]) = square_graph();
        let bogus = NodeIndex::new(99);
        assert!(graph.breadth_first_search(a, bogus).is_err());
        assert!(graph.breadth_first_search(bogus, a).is_err());
    }
}
