use super::{EdgeId, NodeId};

#[derive(Debug, Clone)]
pub(super) struct NodeEntry<N> {
    pub(super) name: String,
    pub(super) label: N,
    pub(super) parent: Option<NodeId>,
    pub(super) in_edges: Vec<EdgeId>,
    pub(super) out_edges: Vec<EdgeId>,
}

#[derive(Debug, Clone)]
pub(super) struct EdgeEntry<E> {
    pub(super) sources: Vec<NodeId>,
    pub(super) targets: Vec<NodeId>,
    pub(super) label: E,
}
