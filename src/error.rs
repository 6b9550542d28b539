use thiserror::Error as ThisError;

use crate::graph::node::NodeIndex;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("node {0} is not part of the graph")]
    NodeNotInGraph(NodeIndex),

    #[error("empty path")]
    EmptyPath,
}
