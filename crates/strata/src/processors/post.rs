use crate::graphlib::NodeId;
use crate::{LayoutGraph, LayoutWarning, Padding};

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}

/// Translates the drawing so its bounding box starts at the padding's top-left corner and sets
/// the graph size to the box plus padding.
///
/// The box covers node rectangles and every route point. Nodes with non-finite coordinates are
/// neither measured nor moved; they are returned as warnings.
pub fn translate_to_padding(g: &mut LayoutGraph, padding: &Padding) -> Vec<LayoutWarning> {
    let mut warnings: Vec<LayoutWarning> = Vec::new();
    let mut bounds = Bounds::EMPTY;
    let mut skipped: Vec<NodeId> = Vec::new();

    g.for_each_node(|v, n| {
        if ![n.x, n.y, n.width, n.height].iter().all(|c| c.is_finite()) {
            skipped.push(v);
            return;
        }
        bounds.include(n.x, n.y);
        bounds.include(n.x + n.width, n.y + n.height);
    });
    g.for_each_edge(|_, lbl| {
        for p in lbl.points.iter().filter(|p| p.x.is_finite() && p.y.is_finite()) {
            bounds.include(p.x, p.y);
        }
    });

    for &node in &skipped {
        warnings.push(LayoutWarning::NonFiniteCoordinates { node });
    }
    if bounds.is_empty() {
        return warnings;
    }

    let dx = padding.left - bounds.min_x;
    let dy = padding.top - bounds.min_y;
    g.for_each_node_mut(|v, n| {
        if skipped.contains(&v) {
            return;
        }
        n.x += dx;
        n.y += dy;
    });
    g.for_each_edge_mut(|_, lbl| {
        for p in &mut lbl.points {
            p.x += dx;
            p.y += dy;
        }
    });

    let label = g.graph_mut();
    label.width = bounds.max_x - bounds.min_x + padding.horizontal();
    label.height = bounds.max_y - bounds.min_y + padding.vertical();
    warnings
}
