//! Layer assignment.
//!
//! Both strategies expect an acyclic graph and write `layer` on every node plus `layer_count` on
//! the graph label.

pub mod longest_path;
pub mod topological;

pub use longest_path::longest_path;
pub use topological::topological;

use crate::LayoutGraph;
use crate::graphlib::NodeId;
use rustc_hash::FxHashMap as HashMap;

fn write_layers(g: &mut LayoutGraph, layers: &HashMap<NodeId, usize>) -> usize {
    for (&v, &layer) in layers {
        if let Some(n) = g.node_mut(v) {
            n.layer = Some(layer);
        }
    }
    let layer_count = crate::util::max_layer(g).map_or(0, |m| m + 1);
    g.graph_mut().layer_count = layer_count;
    tracing::debug!(layer_count, "layers assigned");
    layer_count
}
