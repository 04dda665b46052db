use crate::{LayoutGraph, LayoutWarning};

/// One warning per edge without exactly one source and one target.
pub fn check_simple_edges(g: &LayoutGraph) -> Vec<LayoutWarning> {
    g.edges()
        .filter(|&e| !g.is_simple_edge(e))
        .map(|e| LayoutWarning::NonSimpleEdge {
            edge: e,
            sources: g.sources_of(e).len(),
            targets: g.targets_of(e).len(),
        })
        .collect()
}
