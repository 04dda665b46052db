//! Layer-by-layer barycenter sweeps with randomized restarts.

use super::cross_count::{cross_count, two_layer_cross_count};
use crate::LayoutGraph;
use crate::graphlib::NodeId;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap as HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarycenterSettings {
    /// Sweeps per restart, alternating down and up, starting down.
    pub iterations: usize,
    /// Number of random first-layer permutations to try.
    pub permutations: usize,
}

struct Sweeper<'a> {
    g: &'a LayoutGraph,
    layering: Vec<Vec<NodeId>>,
    pos: HashMap<NodeId, usize>,
}

impl<'a> Sweeper<'a> {
    fn new(g: &'a LayoutGraph, layering: Vec<Vec<NodeId>>) -> Self {
        let mut sweeper = Self {
            g,
            layering,
            pos: HashMap::default(),
        };
        for i in 0..sweeper.layering.len() {
            sweeper.index_layer(i);
        }
        sweeper
    }

    fn index_layer(&mut self, i: usize) {
        for (p, &v) in self.layering[i].iter().enumerate() {
            self.pos.insert(v, p);
        }
    }

    fn set_layer(&mut self, i: usize, order: Vec<NodeId>) {
        self.layering[i] = order;
        self.index_layer(i);
    }

    fn sweep(&mut self, iterations: usize) {
        let n = self.layering.len();
        for j in 0..iterations {
            if j % 2 == 0 {
                for i in 1..n {
                    self.reorder(i, i - 1);
                }
            } else {
                for i in (0..n.saturating_sub(1)).rev() {
                    self.reorder(i, i + 1);
                }
            }
        }
    }

    fn reorder(&mut self, layer: usize, fixed: usize) {
        let (north, south) = if fixed < layer {
            (fixed, layer)
        } else {
            (layer, fixed)
        };
        let before = two_layer_cross_count(self.g, &self.layering[north], &self.layering[south]);

        let sorted = sorted_by_barycenter(self.g, &self.layering[layer], &self.pos, fixed, fixed < layer);
        let previous = std::mem::take(&mut self.layering[layer]);
        self.set_layer(layer, sorted);

        let after = two_layer_cross_count(self.g, &self.layering[north], &self.layering[south]);
        if before < after {
            self.set_layer(layer, previous);
        }
    }
}

/// Sorts `nodes` by the mean position of their neighbours in layer `fixed`, breaking ties by
/// current position.
///
/// Nodes without such neighbours take a running value that starts at 1 and grows by 1 per
/// neighbourless node and by the barycenter of every other node, so they stay near their slot.
fn sorted_by_barycenter(
    g: &LayoutGraph,
    nodes: &[NodeId],
    pos: &HashMap<NodeId, usize>,
    fixed: usize,
    use_predecessors: bool,
) -> Vec<NodeId> {
    let in_fixed = |u: &NodeId| g.node(*u).and_then(|n| n.layer) == Some(fixed);

    let mut running_max: f64 = 1.0;
    let mut keyed: Vec<(f64, usize, NodeId)> = Vec::with_capacity(nodes.len());
    for &v in nodes {
        let neighbours: Vec<NodeId> = if use_predecessors {
            g.predecessors(v)
        } else {
            g.successors(v)
        };
        let positions: Vec<usize> = neighbours
            .iter()
            .filter(|u| in_fixed(u))
            .filter_map(|u| pos.get(u).copied())
            .collect();

        let barycenter = if positions.is_empty() {
            let b = running_max;
            running_max += 1.0;
            b
        } else {
            let b = positions.iter().sum::<usize>() as f64 / positions.len() as f64;
            running_max += b;
            b
        };
        keyed.push((barycenter, pos.get(&v).copied().unwrap_or(usize::MAX), v));
    }

    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    keyed.into_iter().map(|(_, _, v)| v).collect()
}

/// Reorders one layer against the fixed adjacent layer `fixed`, keeping the previous order if
/// the new one crosses more edges between the two layers. Returns the resulting order.
pub fn reorder_layer(
    g: &LayoutGraph,
    layering: &[Vec<NodeId>],
    layer: usize,
    fixed: usize,
) -> Vec<NodeId> {
    if layer >= layering.len() || fixed >= layering.len() {
        return layering.get(layer).cloned().unwrap_or_default();
    }
    let mut sweeper = Sweeper::new(g, layering.to_vec());
    sweeper.reorder(layer, fixed);
    std::mem::take(&mut sweeper.layering[layer])
}

/// Runs the barycenter heuristic on `layering` and returns the final order and its crossing
/// count.
///
/// Each restart shuffles the first layer and sweeps. The first restart with the fewest total
/// crossings wins; its first layer is put back and the sweeps run once more from there.
pub fn barycenter<R: Rng + ?Sized>(
    g: &LayoutGraph,
    layering: Vec<Vec<NodeId>>,
    settings: BarycenterSettings,
    rng: &mut R,
) -> (Vec<Vec<NodeId>>, usize) {
    if layering.is_empty() {
        return (layering, 0);
    }
    let mut sweeper = Sweeper::new(g, layering);

    let mut best: Option<(usize, usize, Vec<NodeId>)> = None;
    for restart in 0..settings.permutations {
        let mut first = sweeper.layering[0].clone();
        first.shuffle(rng);
        sweeper.set_layer(0, first.clone());
        sweeper.sweep(settings.iterations);

        let crossings = cross_count(g, &sweeper.layering);
        if best.as_ref().is_none_or(|(_, c, _)| crossings < *c) {
            best = Some((restart, crossings, first));
        }
    }

    if let Some((restart, crossings, first)) = best {
        tracing::debug!(restart, crossings, "best barycenter restart");
        sweeper.set_layer(0, first);
    }
    sweeper.sweep(settings.iterations);

    let crossings = cross_count(g, &sweeper.layering);
    (sweeper.layering, crossings)
}
