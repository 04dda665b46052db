use crate::graphlib::{EdgeId, GraphError, NodeId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("assumed an acyclic graph but no source was found ({unassigned} nodes left without a layer)")]
    NoSourceFound { unassigned: usize },

    #[error("dummy node {node} must have exactly one outgoing edge, found {found}")]
    MalformedDummyChain { node: NodeId, found: usize },

    #[error("invalid layout options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("node handle {0} does not refer to a live node")]
    UnknownNode(NodeId),

    #[error("edge handle {0} does not refer to a live edge")]
    UnknownEdge(EdgeId),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, Error>;
