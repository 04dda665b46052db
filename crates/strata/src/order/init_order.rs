use crate::LayoutGraph;
use crate::graphlib::NodeId;

/// Groups nodes by layer in child-list order, ignoring any existing `position_in_layer`.
pub fn init_order(g: &LayoutGraph) -> Vec<Vec<NodeId>> {
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
    layering
}
