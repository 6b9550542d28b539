use crate::graph::node::NodeIndex;

/// Side channel for observing node state transitions during a search, e.g.
/// to highlight the progress of the search on a map display.
///
/// During one search call a node moves from unvisited to the frontier (it
/// was enqueued for later expansion) and from the frontier to visited (it
/// was expanded); visited is terminal. The notifications are fire-and-forget:
/// the search never reads anything back and its result does not depend on
/// the observer.
pub trait SearchObserver {
    /// `node` was discovered and enqueued for later expansion.
    fn node_entered_frontier(&mut self, _node: NodeIndex) {}

    /// `node` was expanded and will not be processed again in this search.
    fn node_visited(&mut self, _node: NodeIndex) {}
}

/// Observer discarding all notifications.
#[derive(Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
