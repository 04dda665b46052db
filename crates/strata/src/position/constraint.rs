use super::{Spacing, assign_layer_x, dummy_predecessor};
use crate::LayoutGraph;
use crate::graphlib::NodeId;
use crate::util::layer_matrix;
use rustc_hash::FxHashMap as HashMap;

/// A y value shared by one real node or by all dummies of one chain.
#[derive(Debug, Default)]
struct Cell {
    /// `(dependency, offset)`; `None` is the origin at y = 0.
    deps: Vec<(Option<usize>, f64)>,
    nodes: Vec<NodeId>,
    value: Option<f64>,
}

/// Places nodes by propagating "below the previous node of my layer" constraints.
///
/// Every cell starts at or below y = 0 and below the node preceding each of its nodes in their
/// layer, by that node's height plus the gap below it. Cells are resolved once all their
/// dependencies are, until nothing changes. Cells caught in a dependency cycle stay unresolved:
/// their nodes are left at y = 0 and returned.
pub fn constraint(g: &mut LayoutGraph, spacing: &Spacing) -> Vec<NodeId> {
    let layering = layer_matrix(g);

    let mut cells: Vec<Cell> = Vec::new();
    let mut cell_of: HashMap<NodeId, usize> = HashMap::default();
    for layer in &layering {
        for (l, &v) in layer.iter().enumerate() {
            let shared = dummy_predecessor(g, v).and_then(|u| cell_of.get(&u).copied());
            let cell = shared.unwrap_or_else(|| {
                cells.push(Cell {
                    deps: vec![(None, 0.0)],
                    ..Default::default()
                });
                cells.len() - 1
            });
            cells[cell].nodes.push(v);
            cell_of.insert(v, cell);

            if l > 0 {
                let prev = layer[l - 1];
                if let Some(&prev_cell) = cell_of.get(&prev) {
                    let offset = spacing.extent(g, prev);
                    cells[cell].deps.push((Some(prev_cell), offset));
                }
            }
        }
    }

    loop {
        let mut progressed = false;
        for i in 0..cells.len() {
            if cells[i].value.is_some() {
                continue;
            }
            let mut value: f64 = 0.0;
            let mut ready = true;
            for &(dep, offset) in &cells[i].deps {
                let base = match dep {
                    None => Some(0.0),
                    Some(d) => cells[d].value,
                };
                let Some(base) = base else {
                    ready = false;
                    break;
                };
                value = value.max(base + offset);
            }
            if ready {
                cells[i].value = Some(value);
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }

    let mut unresolved: Vec<NodeId> = Vec::new();
    for cell in &cells {
        let y = cell.value.unwrap_or(0.0);
        for &v in &cell.nodes {
            if let Some(n) = g.node_mut(v) {
                n.y = y;
            }
        }
        if cell.value.is_none() {
            unresolved.extend(cell.nodes.iter().copied());
        }
    }

    assign_layer_x(g, &layering, spacing.layer);
    unresolved
}
