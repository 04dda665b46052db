//! Helpers shared by several phases.
//!
//! Layers are never stored; they are derived from node labels whenever a phase needs them.

use crate::graphlib::NodeId;
use crate::{LayoutGraph, NodeLabel};

/// Nodes grouped by `layer`, each layer ordered by `position_in_layer`.
///
/// The outer index is the layer index; layers without nodes are present but empty. Nodes without
/// a layer are skipped. Nodes without a position keep child-list order after positioned ones.
pub fn layer_matrix(g: &LayoutGraph) -> Vec<Vec<NodeId>> {
    let mut layering: Vec<Vec<NodeId>> = Vec::new();
    for v in g.nodes() {
        let Some(layer) = g.node(v).and_then(|n| n.layer) else {
            continue;
        };
        if layering.len() <= layer {
            layering.resize_with(layer + 1, Vec::new);
        }
        layering[layer].push(v);
    }

    for layer in &mut layering {
        layer.sort_by_key(|&v| {
            g.node(v)
                .and_then(|n| n.position_in_layer)
                .unwrap_or(usize::MAX)
        });
    }
    layering
}

/// Writes each node's index in its layer vector to `position_in_layer`.
pub fn assign_positions(g: &mut LayoutGraph, layering: &[Vec<NodeId>]) {
    for layer in layering {
        for (i, &v) in layer.iter().enumerate() {
            if let Some(n) = g.node_mut(v) {
                n.position_in_layer = Some(i);
            }
        }
    }
}

pub fn max_layer(g: &LayoutGraph) -> Option<usize> {
    g.nodes().filter_map(|v| g.node(v).and_then(|n| n.layer)).max()
}

pub(crate) fn add_dummy_node(g: &mut LayoutGraph, label: NodeLabel, prefix: &str) -> NodeId {
    if !g.has_node_named(prefix) {
        return g.set_node(prefix, label);
    }
    let mut i = g.node_count();
    loop {
        let name = format!("{prefix}{i}");
        if !g.has_node_named(&name) {
            return g.set_node(name, label);
        }
        i += 1;
    }
}
