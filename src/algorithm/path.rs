use std::cmp::Ordering;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::graph::node::NodeIndex;
use crate::graph::road::RoadWeight;

/// [Path] describes a route through the graph as the ordered sequence of
/// traversed nodes together with the total cost (= sum of the traversed
/// edge weights).
///
/// Consecutive nodes are connected by an existing edge; the invariant is
/// upheld at the construction sites, which only ever append enumerated
/// neighbors. The empty path is the canonical "no path found" value.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<NodeIndex>,
    cost: RoadWeight,
}

impl Path {
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            cost: RoadWeight::zero(),
        }
    }

    /// the zero-cost path consisting of `node` alone.
    pub fn single(node: NodeIndex) -> Self {
        Self {
            nodes: vec![node],
            cost: RoadWeight::zero(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// number of nodes in the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    pub fn cost(&self) -> RoadWeight {
        self.cost
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.nodes.contains(&node)
    }

    pub fn origin_node(&self) -> Result<NodeIndex, Error> {
        self.nodes.first().copied().ok_or(Error::EmptyPath)
    }

    pub fn destination_node(&self) -> Result<NodeIndex, Error> {
        self.nodes.last().copied().ok_or(Error::EmptyPath)
    }

    /// `self` extended by one more node reached over an edge of weight
    /// `edge_weight`. Callers must only append nodes connected to the
    /// current destination by an existing edge.
    pub(crate) fn extended(&self, next: NodeIndex, edge_weight: RoadWeight) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(next);
        Self {
            nodes,
            cost: self.cost + edge_weight,
        }
    }
}

/// order by cost, then by node sequence.
///
/// This ordering can be used to bring `Vec`s of paths into a deterministic
/// order to make them comparable.
impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        let cmp_cost = self.cost.cmp(&other.cost);
        if cmp_cost == Ordering::Equal {
            self.nodes.cmp(&other.nodes)
        } else {
            cmp_cost
        }
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
