//! Break cycles by reversing a feedback arc set (FAS).
//!
//! Reversal is recorded on the edge label, so [`undo`] can restore the original orientation once
//! edges are routed.

use crate::graphlib::{EdgeId, NodeId};
use crate::{LayoutGraph, Result};
use rustc_hash::FxHashMap as HashMap;

/// Reverses every edge that points backwards in the greedy order. Returns the number of reversed
/// edges. Self-loops are left alone.
pub fn run(g: &mut LayoutGraph) -> Result<usize> {
    let order = crate::greedy_fas::greedy_order(g);
    let rank: HashMap<NodeId, usize> = order.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let fas: Vec<EdgeId> = g
        .edges()
        .filter(|&e| {
            let Some((v, w)) = g.endpoints(e) else {
                return false;
            };
            v != w && rank.get(&v) > rank.get(&w)
        })
        .collect();

    for &e in &fas {
        reverse(g, e)?;
    }
    tracing::debug!(reversed = fas.len(), "cycle breaking done");
    Ok(fas.len())
}

/// Restores the orientation of every reversed edge, reversing its route with it.
pub fn undo(g: &mut LayoutGraph) -> Result<usize> {
    let reversed: Vec<EdgeId> = g
        .edges()
        .filter(|&e| g.edge(e).is_some_and(|lbl| lbl.reversed))
        .collect();

    for &e in &reversed {
        reverse(g, e)?;
        if let Some(lbl) = g.edge_mut(e) {
            lbl.points.reverse();
        }
    }
    Ok(reversed.len())
}

/// Swaps the edge's endpoints and toggles its `reversed` flag.
pub fn reverse(g: &mut LayoutGraph, e: EdgeId) -> Result<()> {
    g.reverse_edge(e)?;
    if let Some(lbl) = g.edge_mut(e) {
        lbl.reversed = !lbl.reversed;
    }
    Ok(())
}
