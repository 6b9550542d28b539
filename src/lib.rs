//! Single-source shortest-path and alternative-route search on weighted,
//! directed graphs of geographic locations.
//!
//! The [`graph::RoadGraph`] is constructed once by a loader and stays
//! read-only during all queries. The search algorithms are exposed as traits
//! which are implemented for every type providing the graph capability
//! traits in [`graph`]:
//!
//! * [`algorithm::BreadthFirstSearch`]: fewest traversed edges
//! * [`algorithm::DijkstraShortestPath`]: lowest total edge weight
//! * [`algorithm::AStarShortestPath`]: lowest total edge weight, guided by a
//!   travel-time heuristic
//! * [`algorithm::AlternativeRoute`]: cheapest route sufficiently different
//!   from the best route

#![warn(
    clippy::all,
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    nonstandard_style
)]

pub mod algorithm;
pub mod collections;
pub mod error;
pub mod graph;

pub use crate::error::Error;
