//! Search for a cheap route which is sufficiently different from the best
//! route.

use crate::algorithm::astar::AStarShortestPath;
use crate::algorithm::observer::{NoopObserver, SearchObserver};
use crate::algorithm::path::Path;
use crate::collections::HashSet;
use crate::error::Error;
use crate::graph::modifiers::ExcludeEdge;
use crate::graph::node::NodeIndex;
use crate::graph::{CrowFlyDistance, GetNode, GetNodeEdges};

/// Minimum fraction of best-path nodes a route must avoid to qualify as an
/// alternative.
const SUFFICIENT_DIFFERENCE: f64 = 0.2;

/// Fraction of the nodes of `best` which are absent from `candidate`.
///
/// The denominator is the node count of `best`, not of `candidate`.
fn path_difference(candidate: &Path, best: &Path) -> f64 {
    let candidate_nodes: HashSet<NodeIndex> = candidate.nodes().iter().copied().collect();
    let missing = best
        .nodes()
        .iter()
        .filter(|node| !candidate_nodes.contains(node))
        .count();
    missing as f64 / best.len() as f64
}

pub trait AlternativeRoute {
    /// Cheapest route from `start` to `end` avoiding more than 20% of the
    /// nodes of the best route found by
    /// [`a_star`](crate::algorithm::AStarShortestPath::a_star).
    ///
    /// Candidates are generated by re-running the search once per edge of
    /// the best path, with exactly that one edge excluded from traversal.
    /// When candidates of equal cost qualify, the one whose excluded edge
    /// comes first along the best path wins. Returns the empty path when no
    /// route exists at all or when no candidate clears the difference
    /// threshold; the result is never node-identical to the best route.
    fn alternative_route(&self, start: NodeIndex, end: NodeIndex) -> Result<Path, Error> {
        self.alternative_route_observed(start, end, &mut NoopObserver)
    }

    /// Like [`alternative_route`](AlternativeRoute::alternative_route),
    /// additionally notifying `observer` of node state transitions of the
    /// inner searches.
    fn alternative_route_observed(
        &self,
        start: NodeIndex,
        end: NodeIndex,
        observer: &mut dyn SearchObserver,
    ) -> Result<Path, Error>;
}

impl<G> AlternativeRoute for G
where
    G: GetNode + GetNodeEdges + CrowFlyDistance,
{
    fn alternative_route_observed(
        &self,
        start: NodeIndex,
        end: NodeIndex,
        observer: &mut dyn SearchObserver,
    ) -> Result<Path, Error> {
        let best = self.a_star_observed(start, end, observer)?;
        if best.len() < 2 {
            return Ok(Path::empty());
        }
        log::debug!(
            "alternative route: best path has {} nodes, running {} detour searches",
            best.len(),
            best.len() - 1
        );

        let mut best_alternative: Option<Path> = None;
        for window in best.nodes().windows(2) {
            let modified = ExcludeEdge::new(self, window[0], window[1]);
            let candidate = modified.a_star_observed(start, end, observer)?;
            if candidate.is_empty() || path_difference(&candidate, &best) <= SUFFICIENT_DIFFERENCE
            {
                continue;
            }
            match &best_alternative {
                // earlier candidates win cost ties
                Some(current) if candidate.cost() >= current.cost() => {}
                _ => best_alternative = Some(candidate),
            }
        }
        Ok(best_alternative.unwrap_or_else(Path::empty))
    }
}

#[cfg(test)]
mod tests {
    use geo_types::Coordinate;

    use crate::algorithm::{AStarShortestPath, Path};
    use crate::graph::node::NodeIndex;
    use crate::graph::{RoadGraph, RoadWeight};

    use super::{path_difference, AlternativeRoute};

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
    fn test_alternative_takes_the_other_side_of_the_square() {
        let (graph, [a, b, c, d]) = square_graph();
        let best = graph.a_star(a, c).unwrap();
        assert_eq!(best.nodes(), &[a, b, c]);

        let alternative = graph.alternative_route(a, c).unwrap();
        assert_eq!(alternative.nodes(), &[a, d, c]);
        assert_eq!(alternative.cost(), RoadWeight::from(2.0));
        assert_ne!(alternative.nodes(), best.nodes());
    }

    #[test]
    fn test_alternative_meets_difference_threshold() {
        let (graph, [a, _, c, _]) = square_graph();
        let best = graph.a_star(a, c).unwrap();
        let alternative = graph.alternative_route(a, c).unwrap();
        assert!(path_difference(&alternative, &best) > super::SUFFICIENT_DIFFERENCE);
    }

    #[test]
    fn test_no_alternative_when_detour_overlaps_too_much() {
        // a long chain with a short bypass around one middle edge: every
        // detour reuses all chain nodes, so no candidate is different enough
        let mut graph = RoadGraph::new(1000.0);
        let nodes: Vec<_> = (0..10)
            .map(|i| graph.add_node(Coordinate::from((i as f64, 0.0))))
            .collect();
        for pair in nodes.windows(2) {
            graph
                .add_edge_bidirectional(pair[0], pair[1], RoadWeight::from(1.0))
                .unwrap();
        }
        let bypass = graph.add_node(Coordinate::from((4.5, 1.0)));
        graph
            .add_edge_bidirectional(nodes[4], bypass, RoadWeight::from(2.0))
            .unwrap();
        graph
            .add_edge_bidirectional(bypass, nodes[5], RoadWeight::from(2.0))
            .unwrap();

        let best = graph.a_star(nodes[0], nodes[9]).unwrap();
        assert_eq!(best.len(), 10);
        assert!(graph.alternative_route(nodes[0], nodes[9]).unwrap().is_empty());
    }

    #[test]
    fn test_no_alternative_without_any_route() {
        let mut graph = RoadGraph::new(1.0);
        let a = graph.add_node(Coordinate::from((0.0, 0.0)));
        let b = graph.add_node(Coordinate::from((1.0, 0.0)));
        assert!(graph.alternative_route(a, b).unwrap().is_empty());
    }

    #[test]
    fn test_no_alternative_for_single_node_route() {
        let (graph, [a, ..]) = square_graph();
        assert!(graph.alternative_route(a, a).unwrap().is_empty());
    }

    #[test]
    fn test_no_alternative_on_a_plain_chain() {
        // removing any chain edge disconnects start from end
        let mut graph = RoadGraph::new(1000.0);
        let a = graph.add_node(Coordinate::from((0.0, 0.0)));
        let b = graph.add_node(Coordinate::from((1.0, 0.0)));
        let c = graph.add_node(Coordinate::from((2.0, 0.0)));
        graph.add_edge(a, b, RoadWeight::from(1.0)).unwrap();
        graph.add_edge(b, c, RoadWeight::from(1.0)).unwrap();
        assert!(graph.alternative_route(a, c).unwrap().is_empty());
    }

    #[test]
    fn test_cheapest_qualifying_candidate_wins() {
        // two detours around the best path: an expensive one near the start
        // and a cheaper one near the end
        let mut graph = RoadGraph::new(1000.0);
        let a = graph.add_node(Coordinate::from((0.0, 0.0)));
        let b = graph.add_node(Coordinate::from((1.0, 0.0)));
        let c = graph.add_node(Coordinate::from((2.0, 0.0)));
        let expensive = graph.add_node(Coordinate::from((0.5, 1.0)));
        let cheap = graph.add_node(Coordinate::from((1.5, -1.0)));
        graph.add_edge(a, b, RoadWeight::from(1.0)).unwrap();
        graph.add_edge(b, c, RoadWeight::from(1.0)).unwrap();
        graph.add_edge(a, expensive, RoadWeight::from(4.0)).unwrap();
        graph.add_edge(expensive, c, RoadWeight::from(4.0)).unwrap();
        graph.add_edge(a, cheap, RoadWeight::from(2.0)).unwrap();
        graph.add_edge(cheap, c, RoadWeight::from(2.0)).unwrap();

        let best = graph.a_star(a, c).unwrap();
        assert_eq!(best.nodes(), &[a, b, c]);

        let alternative = graph.alternative_route(a, c).unwrap();
        assert_eq!(alternative.nodes(), &[a, cheap, c]);
        assert_eq!(alternative.cost(), RoadWeight::from(4.0));
    }

    #[test]
    fn test_path_difference_is_asymmetric() {
        let long = Path::single(NodeIndex::new(0))
            .extended(NodeIndex::new(1), RoadWeight::from(1.0))
            .extended(NodeIndex::new(2), RoadWeight::from(1.0))
            .extended(NodeIndex::new(3), RoadWeight::from(1.0));
        let short = Path::single(NodeIndex::new(0)).extended(NodeIndex::new(3), RoadWeight::from(1.0));
        // half of `long`'s nodes are missing from `short`...
        assert_eq!(path_difference(&short, &long), 0.5);
        // ...but nothing of `short` is missing from `long`
        assert_eq!(path_difference(&long, &short), 0.0);
    }
}
