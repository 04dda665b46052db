use crate::graphlib::NodeId;
use crate::{Error, LayoutGraph, Result};
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use std::collections::VecDeque;

/// Gives every node its own layer, in topological order.
///
/// A node becomes a candidate once all predecessors sharing its parent have a layer. Candidates
/// are taken first in, first out and numbered with a running counter, so the layer count equals
/// the node count. Returns the layer count.
pub fn topological(g: &mut LayoutGraph) -> Result<usize> {
    let mut layers: HashMap<NodeId, usize> = HashMap::default();
    let mut queued: HashSet<NodeId> = HashSet::default();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    let eligible = |v: NodeId, layers: &HashMap<NodeId, usize>| {
        let parent = g.parent(v);
        g.predecessors(v)
            .into_iter()
            .filter(|&u| u != v && g.parent(u) == parent)
            .all(|u| layers.contains_key(&u))
    };

    for v in g.nodes() {
        if eligible(v, &layers) {
            queued.insert(v);
            queue.push_back(v);
        }
    }

    let mut counter = 0;
    while let Some(v) = queue.pop_front() {
        layers.insert(v, counter);
        counter += 1;
        for w in g.successors(v) {
            if w == v || layers.contains_key(&w) || queued.contains(&w) {
                continue;
            }
            if eligible(w, &layers) {
                queued.insert(w);
                queue.push_back(w);
            }
        }
    }

    let unassigned = g.node_count() - layers.len();
    if unassigned > 0 {
        return Err(Error::NoSourceFound { unassigned });
    }

    Ok(super::write_layers(g, &layers))
}
