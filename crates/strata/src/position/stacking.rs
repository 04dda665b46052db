use super::{Spacing, assign_layer_x, dummy_predecessor};
use crate::LayoutGraph;
use crate::graphlib::NodeId;
use crate::util::layer_matrix;

/// Stacks every layer from y = 0 downwards.
pub fn simple(g: &mut LayoutGraph, spacing: &Spacing) {
    let layering = layer_matrix(g);
    for layer in &layering {
        let mut cursor: f64 = 0.0;
        for &v in layer {
            let extent = spacing.extent(g, v);
            if let Some(n) = g.node_mut(v) {
                n.y = cursor;
            }
            cursor += extent;
        }
    }
    assign_layer_x(g, &layering, spacing.layer);
}

/// Stacks every layer like [`simple`], but keeps dummy chains straight where it can.
///
/// A dummy whose dummy predecessor sits at or below the layer cursor takes the predecessor's y.
/// Otherwise the dummy goes to the cursor, and every node in earlier layers at or below the
/// predecessor moves down by the difference, which straightens the chain without reordering any
/// earlier layer.
pub fn stacking(g: &mut LayoutGraph, spacing: &Spacing) {
    let layering = layer_matrix(g);
    for (i, layer) in layering.iter().enumerate() {
        let mut cursor: f64 = 0.0;
        for &v in layer {
            let extent = spacing.extent(g, v);
            let pred_y = dummy_predecessor(g, v).and_then(|u| g.node(u)).map(|n| n.y);

            let y = match pred_y {
                Some(py) if py >= cursor => py,
                Some(py) => {
                    shift_below(g, &layering[..i], py, cursor - py);
                    cursor
                }
                None => cursor,
            };
            if let Some(n) = g.node_mut(v) {
                n.y = y;
            }
            cursor = y + extent;
        }
    }
    assign_layer_x(g, &layering, spacing.layer);
}

fn shift_below(g: &mut LayoutGraph, layers: &[Vec<NodeId>], line: f64, delta: f64) {
    for &v in layers.iter().flatten() {
        if let Some(n) = g.node_mut(v) {
            if n.y >= line {
                n.y += delta;
            }
        }
    }
}
