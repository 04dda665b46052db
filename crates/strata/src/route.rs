//! Polyline edge routing.

use crate::graphlib::EdgeId;
use crate::{LayoutGraph, NodeLabel, Point};

/// Routes every edge as a straight segment between facing sides of its endpoints.
///
/// When the source's layer precedes the target's, the edge leaves the source's right side and
/// enters the target's left side, both at half height; otherwise the sides are mirrored. Dummy
/// links are routed too, so chain restoration finds the start and end of the whole chain.
/// Returns the number of routed edges.
pub fn polyline(g: &mut LayoutGraph) -> usize {
    let edges: Vec<EdgeId> = g.edge_ids();
    let mut routed = 0;
    for e in edges {
        let Some((v, w)) = g.endpoints(e) else {
            continue;
        };
        let (Some(source), Some(target)) = (g.node(v), g.node(w)) else {
            continue;
        };
        let points = route(source, target);
        if let Some(lbl) = g.edge_mut(e) {
            lbl.points = points;
            routed += 1;
        }
    }
    routed
}

fn route(source: &NodeLabel, target: &NodeLabel) -> Vec<Point> {
    let forward = match (source.layer, target.layer) {
        (Some(s), Some(t)) => s < t,
        _ => source.x < target.x,
    };
    let source_mid = source.y + source.height / 2.0;
    let target_mid = target.y + target.height / 2.0;
    if forward {
        vec![
            Point::new(source.x + source.width, source_mid),
            Point::new(target.x, target_mid),
        ]
    } else {
        vec![
            Point::new(source.x, source_mid),
            Point::new(target.x + target.width, target_mid),
        ]
    }
}
