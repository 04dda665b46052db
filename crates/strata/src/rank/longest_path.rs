use crate::graphlib::NodeId;
use crate::{Error, LayoutGraph, Result};
use rustc_hash::FxHashMap as HashMap;

/// Sources go to layer 0; every other node sits one layer below its deepest predecessor.
///
/// Resolved by repeated passes over the unassigned nodes. A pass that assigns nothing means the
/// graph still has a cycle. Self-loops are ignored. Returns the layer count.
pub fn longest_path(g: &mut LayoutGraph) -> Result<usize> {
    let mut layers: HashMap<NodeId, usize> = HashMap::default();
    let mut unassigned: Vec<NodeId> = g.node_ids();

    while !unassigned.is_empty() {
        let before = unassigned.len();
        unassigned.retain(|&v| {
            let mut layer = 0;
            for u in g.predecessors(v) {
                if u == v {
                    continue;
                }
                let Some(&l) = layers.get(&u) else {
                    return true;
                };
                layer = layer.max(l + 1);
            }
            layers.insert(v, layer);
            false
        });

        if unassigned.len() == before {
            return Err(Error::NoSourceFound {
                unassigned: unassigned.len(),
            });
        }
    }

    Ok(super::write_layers(g, &layers))
}
