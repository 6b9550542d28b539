//! Weighted shortest-path search using the [Dijkstra search
//! algorithm](https://en.wikipedia.org/wiki/Dijkstra's_algorithm).

use crate::algorithm::frontier::{traverse, CostFrontier};
use crate::algorithm::observer::{NoopObserver, SearchObserver};
use crate::algorithm::path::Path;
use crate::error::Error;
use crate::graph::node::NodeIndex;
use crate::graph::{GetNode, GetNodeEdges};

pub trait DijkstraShortestPath {
    /// Cheapest path from `start` to `end` by total edge weight.
    ///
    /// Edge weights must be non-negative; the behavior for negative weights
    /// is undefined and not validated. Returns the empty path when `end` is
    /// unreachable from `start` and the single-node path when
    /// `start == end`.
    fn dijkstra(&self, start: NodeIndex, end: NodeIndex) -> Result<Path, Error> {
        self.dijkstra_observed(start, end, &mut NoopObserver)
    }

    /// Like [`dijkstra`](DijkstraShortestPath::dijkstra), additionally
    /// notifying `observer` of node state transitions.
    fn dijkstra_observed(
        &self,
        start: NodeIndex,
        end: NodeIndex,
        observer: &mut dyn SearchObserver,
    ) -> Result<Path, Error>;
}

impl<G> DijkstraShortestPath for G
where
    G: GetNode + GetNodeEdges,
{
    fn dijkstra_observed(
        &self,
        start: NodeIndex,
        end: NodeIndex,
        observer: &mut dyn SearchObserver,
    ) -> Result<Path, Error> {
        let mut queue = CostFrontier::default();
        traverse(self, start, end, &mut queue, |_, cost| Ok(cost), observer)
    }
}
