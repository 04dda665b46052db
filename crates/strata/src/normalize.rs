//! Split long edges into chains of dummy nodes and join them back together.
//!
//! After [`run`], every edge spans exactly one layer. The original edge is kept as the first link
//! of its chain; the remaining links are dummy edges. [`undo`] walks each chain, collects the
//! dummy positions as bend points and rewires the original edge to its true target.

use crate::graphlib::{EdgeId, NodeId};
use crate::util::add_dummy_node;
use crate::{EdgeLabel, Error, LayoutGraph, NodeLabel, Point, Result};

/// Breaks up every real edge spanning more than one layer. Returns the number of dummy nodes.
pub fn run(g: &mut LayoutGraph) -> Result<usize> {
    let edges: Vec<EdgeId> = g
        .edges()
        .filter(|&e| g.edge(e).is_some_and(|lbl| !lbl.is_dummy))
        .collect();

    let mut dummies = 0;
    for e in edges {
        dummies += break_up_edge(g, e)?.len();
    }
    tracing::debug!(dummies, "dummy chains inserted");
    Ok(dummies)
}

/// Replaces `e` by a chain through one dummy node per intermediate layer.
///
/// `e` itself becomes the first link (source to first dummy). Edges spanning at most one layer,
/// edges whose endpoints have no layer, and hyper-edges are left untouched. Returns the created
/// dummies in chain order.
pub fn break_up_edge(g: &mut LayoutGraph, e: EdgeId) -> Result<Vec<NodeId>> {
    let (v, w) = g.endpoints(e).ok_or(Error::UnknownEdge(e))?;
    if !g.is_simple_edge(e) {
        return Ok(Vec::new());
    }
    let (Some(v_layer), Some(w_layer)) = (layer_of(g, v), layer_of(g, w)) else {
        return Ok(Vec::new());
    };
    if w_layer <= v_layer + 1 {
        return Ok(Vec::new());
    }

    let template = g.edge(e).map(|lbl| lbl.properties.clone()).unwrap_or_default();
    if let Some(lbl) = g.edge_mut(e) {
        lbl.points.clear();
    }

    let mut chain: Vec<NodeId> = Vec::with_capacity(w_layer - v_layer - 1);
    for layer in v_layer + 1..w_layer {
        let dummy = add_dummy_node(
            g,
            NodeLabel {
                layer: Some(layer),
                is_dummy: true,
                chain_origin: Some(e),
                properties: template.clone(),
                ..Default::default()
            },
            "_d",
        );
        match chain.last() {
            None => g.set_endpoints(e, v, dummy)?,
            Some(&prev) => {
                g.add_edge(prev, dummy, dummy_edge(&template))?;
            }
        }
        chain.push(dummy);
    }

    if let Some(&last) = chain.last() {
        g.add_edge(last, w, dummy_edge(&template))?;
    }
    Ok(chain)
}

fn dummy_edge(template: &crate::graphlib::PropertyBag) -> EdgeLabel {
    EdgeLabel {
        is_dummy: true,
        properties: template.clone(),
        ..Default::default()
    }
}

/// Rejoins the chain starting at the real edge `e` and removes its dummies.
///
/// The route becomes the first link's start point, one bend point per dummy, and the last link's
/// end point (node positions stand in for links that were never routed). Dummy edges and edges
/// not leading into a dummy are left alone. Returns the number of bend points.
pub fn restore_broken_edge(g: &mut LayoutGraph, e: EdgeId) -> Result<usize> {
    let lbl = g.edge(e).ok_or(Error::UnknownEdge(e))?;
    if lbl.is_dummy {
        return Ok(0);
    }
    let (v, first) = g.endpoints(e).ok_or(Error::UnknownEdge(e))?;
    if !is_dummy(g, first) {
        return Ok(0);
    }

    let start = lbl
        .points
        .first()
        .copied()
        .or_else(|| g.node(v).map(NodeLabel::position))
        .unwrap_or_default();

    let mut dummies: Vec<NodeId> = Vec::new();
    let mut bends: Vec<Point> = Vec::new();
    let mut current = first;
    let mut last_link = e;
    while is_dummy(g, current) {
        if dummies.contains(&current) {
            return Err(Error::MalformedDummyChain {
                node: current,
                found: g.out_degree(current),
            });
        }
        let node = g.node(current).ok_or(Error::UnknownNode(current))?;
        bends.push(node.position());
        dummies.push(current);

        let [out] = g.out_edges(current) else {
            return Err(Error::MalformedDummyChain {
                node: current,
                found: g.out_degree(current),
            });
        };
        last_link = *out;
        current = g.target(last_link).ok_or(Error::UnknownEdge(last_link))?;
    }

    let end = g
        .edge(last_link)
        .and_then(|lbl| lbl.points.last().copied())
        .or_else(|| g.node(current).map(NodeLabel::position))
        .unwrap_or_default();

    g.set_endpoints(e, v, current)?;
    let bend_count = bends.len();
    if let Some(lbl) = g.edge_mut(e) {
        lbl.points = std::iter::once(start)
            .chain(bends)
            .chain(std::iter::once(end))
            .collect();
    }
    for d in dummies {
        g.remove_node(d);
    }
    Ok(bend_count)
}

/// Restores every chain, then drops any dummy node left behind. Returns the number of restored
/// edges.
pub fn undo(g: &mut LayoutGraph) -> Result<usize> {
    let heads: Vec<EdgeId> = g
        .edges()
        .filter(|&e| {
            g.edge(e).is_some_and(|lbl| !lbl.is_dummy)
                && g.target(e).is_some_and(|w| is_dummy(g, w))
        })
        .collect();

    for &e in &heads {
        restore_broken_edge(g, e)?;
    }

    let leftovers: Vec<NodeId> = g.nodes().filter(|&v| is_dummy(g, v)).collect();
    for v in leftovers {
        g.remove_node(v);
    }
    tracing::debug!(restored = heads.len(), "dummy chains removed");
    Ok(heads.len())
}

fn layer_of(g: &LayoutGraph, v: NodeId) -> Option<usize> {
    g.node(v).and_then(|n| n.layer)
}

fn is_dummy(g: &LayoutGraph, v: NodeId) -> bool {
    g.node(v).is_some_and(|n| n.is_dummy)
}
