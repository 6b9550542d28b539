pub mod alternative_route;
pub mod astar;
pub mod breadth_first;
pub mod dijkstra;
mod frontier;
pub mod observer;
pub mod path;

// re-export all algorithm traits
pub use alternative_route::AlternativeRoute;
pub use astar::AStarShortestPath;
pub use breadth_first::BreadthFirstSearch;
pub use dijkstra::DijkstraShortestPath;
pub use observer::{NoopObserver, SearchObserver};
pub use path::Path;
