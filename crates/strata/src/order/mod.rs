//! Crossing minimization: ordering nodes within their layers.

mod barycenter;
mod cross_count;
mod init_order;

pub use barycenter::{BarycenterSettings, barycenter, reorder_layer};
pub use cross_count::{cross_count, two_layer_cross_count};
pub use init_order::init_order;

use crate::LayoutGraph;

/// Keeps child-list order within every layer.
pub fn keep_order(g: &mut LayoutGraph) {
    let layering = init_order(g);
    crate::util::assign_positions(g, &layering);
}
