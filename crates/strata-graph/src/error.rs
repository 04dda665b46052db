use crate::{EdgeId, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("node handle {0} does not refer to a live node")]
    MissingNode(NodeId),

    #[error("edge handle {0} does not refer to a live edge")]
    MissingEdge(EdgeId),

    #[error("an edge needs at least one source and one target")]
    EmptyEndpoints,
}

pub type Result<T> = std::result::Result<T, GraphError>;
