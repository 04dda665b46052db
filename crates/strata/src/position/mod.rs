//! Node placement: coordinates for every node.
//!
//! Layers run left to right. Every strategy shares the x assignment in [`assign_layer_x`] and
//! differs only in how nodes are stacked vertically within a layer.

mod constraint;
mod stacking;

pub use constraint::constraint;
pub use stacking::{simple, stacking};

use crate::LayoutGraph;
use crate::graphlib::NodeId;

/// Gaps used by every placement strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Below a real node.
    pub node: f64,
    /// Below a dummy node.
    pub dummy: f64,
    /// Between the widest node of a layer and the next layer.
    pub layer: f64,
}

impl Spacing {
    pub const fn uniform(margin: f64) -> Self {
        Self {
            node: margin,
            dummy: margin,
            layer: margin,
        }
    }

    /// Height of `v` plus the gap that has to follow it in its layer.
    fn extent(&self, g: &LayoutGraph, v: NodeId) -> f64 {
        match g.node(v) {
            Some(n) if n.is_dummy => n.height + self.dummy,
            Some(n) => n.height + self.node,
            None => self.node,
        }
    }
}

/// Puts every node of a layer at the layer's x offset and widens dummies to the widest node of
/// their layer. Each layer starts `layer_margin` to the right of the widest node of the
/// previous one.
pub fn assign_layer_x(g: &mut LayoutGraph, layering: &[Vec<NodeId>], layer_margin: f64) {
    let mut offset: f64 = 0.0;
    for layer in layering {
        let max_width = layer
            .iter()
            .filter_map(|&v| g.node(v))
            .map(|n| n.width)
            .fold(0.0, f64::max);

        for &v in layer {
            if let Some(n) = g.node_mut(v) {
                n.x = offset;
                if n.is_dummy {
                    n.width = max_width;
                }
            }
        }
        offset += max_width + layer_margin;
    }
}

/// The dummy node's predecessor, if that is a dummy of the same chain.
fn dummy_predecessor(g: &LayoutGraph, v: NodeId) -> Option<NodeId> {
    let chain = g.node(v).filter(|n| n.is_dummy)?.chain_origin;
    let &e = g.in_edges(v).first()?;
    let u = g.source(e)?;
    g.node(u)
        .filter(|n| n.is_dummy && n.chain_origin == chain)
        .map(|_| u)
}
