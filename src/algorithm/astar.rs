//! Weighted shortest-path search guided by an admissible travel-time
//! heuristic (the [A* search
//! algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm)).

use crate::algorithm::frontier::{traverse, CostFrontier};
use crate::algorithm::observer::{NoopObserver, SearchObserver};
use crate::algorithm::path::Path;
use crate::error::Error;
use crate::graph::node::NodeIndex;
use crate::graph::road::RoadWeight;
use crate::graph::{CrowFlyDistance, GetNode, GetNodeEdges};

/// Estimated remaining travel time from `node` to `end`: the crow-fly
/// distance divided by the maximum road speed of the graph.
///
/// As long as edge weights are travel times respecting the graph's speed
/// bound, the estimate never exceeds the true remaining cost (admissible)
/// and never drops by more than an edge's weight along that edge
/// (consistent), which makes the A* result cost-optimal.
pub(crate) fn travel_time_heuristic<G>(
    graph: &G,
    node: NodeIndex,
    end: NodeIndex,
) -> Result<RoadWeight, Error>
where
    G: CrowFlyDistance,
{
    Ok(RoadWeight::from(
        graph.crow_fly_distance_between(node, end)? / graph.max_road_speed(),
    ))
}

pub trait AStarShortestPath {
    /// Cheapest path from `start` to `end` by total edge weight, expanding
    /// fewer nodes than [`dijkstra`](crate::algorithm::DijkstraShortestPath::dijkstra)
    /// by preferring nodes with a low estimated remaining travel time.
    ///
    /// Returns the same cost-minimal result as Dijkstra for edge weights
    /// that respect the graph's `max_road_speed` bound. Returns the empty
    /// path when `end` is unreachable from `start` and the single-node path
    /// when `start == end`.
    fn a_star(&self, start: NodeIndex, end: NodeIndex) -> Result<Path, Error> {
        self.a_star_observed(start, end, &mut NoopObserver)
    }

    /// Like [`a_star`](AStarShortestPath::a_star), additionally notifying
    /// `observer` of node state transitions.
    fn a_star_observed(
        &self,
        start: NodeIndex,
        end: NodeIndex,
        observer: &mut dyn SearchObserver,
    ) -> Result<Path, Error>;
}

impl<G> AStarShortestPath for G
where
    G: GetNode + GetNodeEdges + CrowFlyDistance,
{
    fn a_star_observed(
        &self,
        start: NodeIndex,
        end: NodeIndex,
        observer: &mut dyn SearchObserver,
    ) -> Result<Path, Error> {
        let mut queue = CostFrontier::default();
        traverse(
            self,
            start,
            end,
            &mut queue,
            // the accumulated cost is kept separate from the enqueued
            // priority, so this is always true-cost-so-far + heuristic
            |node, cost| Ok(cost + travel_time_heuristic(self, node, end)?),
            observer,
        )
    }
}
