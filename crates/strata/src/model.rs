//! Label types carried by the layout graph and small geometry primitives.
//!
//! Layout results are written straight into these labels: node `x`/`y`, edge route `points`, and
//! the graph's overall `width`/`height`.

use crate::graphlib::{EdgeId, Graph, PropertyBag};
use serde::{Deserialize, Serialize};

pub type LayoutGraph = Graph<NodeLabel, EdgeLabel, GraphLabel>;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Padding {
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(12.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphLabel {
    /// Layout options and any caller-defined properties.
    pub properties: PropertyBag,
    /// Number of layers produced by layer assignment.
    pub layer_count: usize,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    /// Top-left corner.
    pub x: f64,
    pub y: f64,
    pub layer: Option<usize>,
    pub position_in_layer: Option<usize>,
    pub is_dummy: bool,
    /// For dummy nodes: the edge whose chain this node belongs to.
    pub chain_origin: Option<EdgeId>,
    pub properties: PropertyBag,
}

impl NodeLabel {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeLabel {
    /// Toggled every time the edge orientation is flipped.
    pub reversed: bool,
    pub is_dummy: bool,
    /// Start point, bend points, end point. Empty until routed.
    pub points: Vec<Point>,
    pub properties: PropertyBag,
}
