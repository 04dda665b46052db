use super::{Graph, NodeId};
use rustc_hash::FxHashMap as HashMap;
use std::collections::VecDeque;

/// Strongly connected components with more than one node, plus nodes with a self-loop.
///
/// Each cycle lists its nodes in insertion order; cycles are sorted by their first node.
pub fn find_cycles<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<NodeId>> {
    struct Tarjan<'a, N, E, G> {
        g: &'a Graph<N, E, G>,
        index: usize,
        stack: Vec<NodeId>,
        on_stack: Vec<bool>,
        indices: HashMap<NodeId, usize>,
        lowlink: HashMap<NodeId, usize>,
        sccs: Vec<Vec<NodeId>>,
    }

    impl<N, E, G> Tarjan<'_, N, E, G> {
        fn strongconnect(&mut self, v: NodeId) {
            self.indices.insert(v, self.index);
            self.lowlink.insert(v, self.index);
            self.index += 1;
            self.stack.push(v);
            self.on_stack[v.index()] = true;

            for w in self.g.successors(v) {
                if !self.indices.contains_key(&w) {
                    self.strongconnect(w);
                    let w_low = self.lowlink.get(&w).copied().unwrap_or(usize::MAX);
                    if let Some(v_low) = self.lowlink.get_mut(&v) {
                        *v_low = (*v_low).min(w_low);
                    }
                } else if self.on_stack[w.index()] {
                    let w_idx = self.indices.get(&w).copied().unwrap_or(usize::MAX);
                    if let Some(v_low) = self.lowlink.get_mut(&v) {
                        *v_low = (*v_low).min(w_idx);
                    }
                }
            }

            if self.lowlink.get(&v) == self.indices.get(&v) {
                let mut scc: Vec<NodeId> = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w.index()] = false;
                    scc.push(w);
                    if w == v {
                        break;
                    }
                }
                self.sccs.push(scc);
            }
        }
    }

    let slots = g.nodes().map(|v| v.index() + 1).max().unwrap_or(0);
    let mut tarjan = Tarjan {
        g,
        index: 0,
        stack: Vec::new(),
        on_stack: vec![false; slots],
        indices: HashMap::default(),
        lowlink: HashMap::default(),
        sccs: Vec::new(),
    };

    for v in g.nodes() {
        if !tarjan.indices.contains_key(&v) {
            tarjan.strongconnect(v);
        }
    }

    let mut cycles: Vec<Vec<NodeId>> = Vec::new();
    for mut scc in tarjan.sccs {
        if scc.len() > 1 {
            scc.sort_unstable();
            cycles.push(scc);
        } else if let Some(&v) = scc.first() {
            if g.successors(v).contains(&v) {
                cycles.push(vec![v]);
            }
        }
    }

    cycles.sort_by_key(|c| c.first().copied());
    cycles
}

pub fn is_acyclic<N, E, G>(g: &Graph<N, E, G>) -> bool {
    topsort(g).is_some()
}

/// Kahn topological order, seeded with sources in insertion order. `None` if the graph has a
/// cycle (self-loops included).
pub fn topsort<N, E, G>(g: &Graph<N, E, G>) -> Option<Vec<NodeId>> {
    let mut indegree: HashMap<NodeId, usize> =
        g.nodes().map(|v| (v, g.predecessors(v).len())).collect();

    let mut queue: VecDeque<NodeId> = g
        .nodes()
        .filter(|v| indegree.get(v).copied() == Some(0))
        .collect();

    let mut order: Vec<NodeId> = Vec::with_capacity(g.node_count());
    while let Some(v) = queue.pop_front() {
        order.push(v);
        for w in g.successors(v) {
            if let Some(d) = indegree.get_mut(&w) {
                *d = d.saturating_sub(1);
                if *d == 0 {
                    queue.push_back(w);
                }
            }
        }
    }

    (order.len() == g.node_count()).then_some(order)
}
