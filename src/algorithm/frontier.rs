//! Shared frontier handling of the search algorithms.
//!
//! All algorithms in this crate walk the graph the same way: pop a partial
//! path from a queue, skip it when its destination was already expanded,
//! otherwise expand it by one edge per not-yet-expanded neighbor. The queue
//! implementation and the priority assigned to enqueued paths is what
//! distinguishes the algorithms.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use num_traits::Zero;

use crate::algorithm::observer::SearchObserver;
use crate::algorithm::path::Path;
use crate::collections::HashSet;
use crate::error::Error;
use crate::graph::node::NodeIndex;
use crate::graph::road::RoadWeight;
use crate::graph::{GetNode, GetNodeEdges};

/// A partial path awaiting expansion together with the priority it was
/// enqueued under. `serial` is a monotonically increasing push counter
/// breaking priority ties in insertion order.
pub(crate) struct Candidate {
    path: Path,
    priority: RoadWeight,
    serial: u64,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.serial == other.serial
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed, so the max-heap pops the smallest priority first
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.serial.cmp(&self.serial))
    }
}

pub(crate) trait FrontierQueue {
    fn push(&mut self, candidate: Candidate);
    fn pop(&mut self) -> Option<Candidate>;
}

/// First-in-first-out frontier; enqueue order wins, priorities are ignored.
#[derive(Default)]
pub(crate) struct FifoFrontier(VecDeque<Candidate>);

impl FrontierQueue for FifoFrontier {
    fn push(&mut self, candidate: Candidate) {
        self.0.push_back(candidate);
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.0.pop_front()
    }
}

/// Frontier ordered by ascending priority; ties pop in insertion order.
#[derive(Default)]
pub(crate) struct CostFrontier(BinaryHeap<Candidate>);

impl FrontierQueue for CostFrontier {
    fn push(&mut self, candidate: Candidate) {
        self.0.push(candidate);
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.0.pop()
    }
}

/// Run one search from `start` to `end`.
///
/// `priority_fn` maps a node and the accumulated cost of reaching it to the
/// priority the extended path is enqueued under. A node may be enqueued
/// several times instead of supporting a priority decrease; stale entries
/// are discarded when popped.
///
/// Returns the first path popped with `end` as its destination, or the
/// empty path once the queue is exhausted.
pub(crate) fn traverse<G, Q, P>(
    graph: &G,
    start: NodeIndex,
    end: NodeIndex,
    queue: &mut Q,
    priority_fn: P,
    observer: &mut dyn SearchObserver,
) -> Result<Path, Error>
where
    G: GetNode + GetNodeEdges,
    Q: FrontierQueue,
    P: Fn(NodeIndex, RoadWeight) -> Result<RoadWeight, Error>,
{
    for node in [start, end] {
        if !graph.contains_node(node) {
            return Err(Error::NodeNotInGraph(node));
        }
    }

    let mut visited: HashSet<NodeIndex> = HashSet::default();
    let mut serial = 0_u64;

    let priority = priority_fn(start, RoadWeight::zero())?;
    queue.push(Candidate {
        path: Path::single(start),
        priority,
        serial,
    });
    observer.node_entered_frontier(start);

    while let Some(candidate) = queue.pop() {
        // candidate paths are never empty
        let to_visit = candidate.path.destination_node()?;
        if visited.contains(&to_visit) {
            continue;
        }
        visited.insert(to_visit);
        observer.node_visited(to_visit);
        if to_visit == end {
            return Ok(candidate.path);
        }
        for (neighbor, edge_weight) in graph.edges_originating_at(to_visit) {
            if visited.contains(&neighbor) {
                continue;
            }
            let extended = candidate.path.extended(neighbor, edge_weight);
            let priority = priority_fn(neighbor, extended.cost())?;
            serial += 1;
            queue.push(Candidate {
                path: extended,
                priority,
                serial,
            });
            observer.node_entered_frontier(neighbor);
        }
    }
    Ok(Path::empty())
}
