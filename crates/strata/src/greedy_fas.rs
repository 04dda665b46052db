//! Greedy node ordering for feedback arc set selection.
//!
//! Sources are peeled onto the left end of the order and sinks onto the right end. When neither
//! exists, the remaining node with the largest out-degree minus in-degree is moved left. Every
//! edge pointing backwards in the resulting order belongs to the feedback arc set.

use crate::graphlib::{Graph, NodeId};

struct Remaining<'a, N, E, G> {
    g: &'a Graph<N, E, G>,
    alive: Vec<bool>,
    in_deg: Vec<i64>,
    out_deg: Vec<i64>,
    count: usize,
}

impl<'a, N, E, G> Remaining<'a, N, E, G> {
    fn new(g: &'a Graph<N, E, G>) -> Self {
        let slots = g.nodes().map(|v| v.index() + 1).max().unwrap_or(0);
        let mut alive = vec![false; slots];
        let mut in_deg = vec![0; slots];
        let mut out_deg = vec![0; slots];
        for v in g.nodes() {
            alive[v.index()] = true;
        }
        for e in g.edges() {
            let Some((v, w)) = g.endpoints(e) else {
                continue;
            };
            if v == w {
                continue;
            }
            out_deg[v.index()] += 1;
            in_deg[w.index()] += 1;
        }
        Self {
            g,
            alive,
            in_deg,
            out_deg,
            count: g.node_count(),
        }
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.g.nodes().filter(|v| self.alive[v.index()])
    }

    fn remove(&mut self, v: NodeId) {
        if !std::mem::replace(&mut self.alive[v.index()], false) {
            return;
        }
        self.count -= 1;
        let g = self.g;
        for &e in g.out_edges(v) {
            if let Some(w) = g.target(e).filter(|&w| w != v) {
                self.in_deg[w.index()] -= 1;
            }
        }
        for &e in g.in_edges(v) {
            if let Some(u) = g.source(e).filter(|&u| u != v) {
                self.out_deg[u.index()] -= 1;
            }
        }
    }

    /// Removes nodes matching `pick` until none is left, scanning in child-list order. A node
    /// that starts matching during a scan is picked up by the same scan.
    fn peel(&mut self, pick: impl Fn(&Self, NodeId) -> bool, taken: &mut Vec<NodeId>) {
        let g = self.g;
        loop {
            let mut progressed = false;
            for v in g.nodes() {
                if self.alive[v.index()] && pick(self, v) {
                    self.remove(v);
                    taken.push(v);
                    progressed = true;
                }
            }
            if !progressed {
                return;
            }
        }
    }
}

/// A total order in which as few edges as the heuristic manages point backwards.
pub fn greedy_order<N, E, G>(g: &Graph<N, E, G>) -> Vec<NodeId> {
    let mut work = Remaining::new(g);
    let mut left: Vec<NodeId> = Vec::with_capacity(g.node_count());
    let mut right: Vec<NodeId> = Vec::new();

    while work.count > 0 {
        work.peel(|w, v| w.in_deg[v.index()] == 0, &mut left);
        work.peel(|w, v| w.out_deg[v.index()] == 0, &mut right);
        if work.count == 0 {
            break;
        }

        // First node wins ties.
        let mut best: Option<(NodeId, i64)> = None;
        for v in work.nodes() {
            let score = work.out_deg[v.index()] - work.in_deg[v.index()];
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((v, score));
            }
        }
        let Some((v, _)) = best else {
            break;
        };
        work.remove(v);
        left.push(v);
    }

    // Sinks were peeled last-first.
    right.reverse();
    left.extend(right);
    left
}
