//! Layout options.
//!
//! Every option is declared as a [`Property`] with an identifier and a default. Options are read
//! from the graph label's property bag, or supplied directly as a [`LayoutOptions`] snapshot.

use crate::graphlib::{Property, PropertyBag};
use crate::position::Spacing;
use crate::{Padding, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleBreakingStrategy {
    Noop,
    #[default]
    Greedy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayeringStrategy {
    Noop,
    #[default]
    LongestPath,
    Topological,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossingMinimizationStrategy {
    Noop,
    KeepOrder,
    #[default]
    Barycenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodePlacementStrategy {
    Noop,
    Simple,
    Stacking,
    #[default]
    Constraint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeRoutingStrategy {
    Noop,
    #[default]
    Polyline,
}

pub const CYCLE_BREAKING: Property<CycleBreakingStrategy> =
    Property::new("strata.cycleBreaking.strategy", CycleBreakingStrategy::default);
pub const LAYERING: Property<LayeringStrategy> =
    Property::new("strata.layering.strategy", LayeringStrategy::default);
pub const CROSSING_MINIMIZATION: Property<CrossingMinimizationStrategy> = Property::new(
    "strata.crossingMinimization.strategy",
    CrossingMinimizationStrategy::default,
);
pub const NODE_PLACEMENT: Property<NodePlacementStrategy> =
    Property::new("strata.nodePlacement.strategy", NodePlacementStrategy::default);
pub const EDGE_ROUTING: Property<EdgeRoutingStrategy> =
    Property::new("strata.edgeRouting.strategy", EdgeRoutingStrategy::default);

/// Sweeps per restart.
pub const CROSSING_MINIMIZATION_ITERATIONS: Property<usize> =
    Property::new("strata.crossingMinimization.iterations", || 5);
/// Randomized restarts of the first layer.
pub const CROSSING_MINIMIZATION_PERMUTATIONS: Property<usize> =
    Property::new("strata.crossingMinimization.permutations", || 5);
pub const SEED: Property<u64> = Property::new("strata.randomSeed", || 42007);

/// Vertical gap between nodes of one layer.
pub const NODE_MARGIN: Property<f64> = Property::new("strata.spacing.node", || 20.0);
/// Vertical gap below a dummy node.
pub const DUMMY_MARGIN: Property<f64> = Property::new("strata.spacing.dummy", || 20.0);
/// Horizontal gap between layers.
pub const LAYER_MARGIN: Property<f64> = Property::new("strata.spacing.layer", || 20.0);
pub const PADDING: Property<Padding> = Property::new("strata.padding", Padding::default);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub cycle_breaking: CycleBreakingStrategy,
    pub layering: LayeringStrategy,
    pub crossing_minimization: CrossingMinimizationStrategy,
    pub node_placement: NodePlacementStrategy,
    pub edge_routing: EdgeRoutingStrategy,
    pub crossing_minimization_iterations: usize,
    pub crossing_minimization_permutations: usize,
    pub seed: u64,
    pub node_margin: f64,
    pub dummy_margin: f64,
    pub layer_margin: f64,
    pub padding: Padding,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::from_properties(&PropertyBag::new())
    }
}

impl LayoutOptions {
    pub fn spacing(&self) -> Spacing {
        Spacing {
            node: self.node_margin,
            dummy: self.dummy_margin,
            layer: self.layer_margin,
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads every option from `bag`, falling back to defaults for unset or ill-typed values.
    pub fn from_properties(bag: &PropertyBag) -> Self {
        Self {
            cycle_breaking: bag.get(&CYCLE_BREAKING),
            layering: bag.get(&LAYERING),
            crossing_minimization: bag.get(&CROSSING_MINIMIZATION),
            node_placement: bag.get(&NODE_PLACEMENT),
            edge_routing: bag.get(&EDGE_ROUTING),
            crossing_minimization_iterations: bag.get(&CROSSING_MINIMIZATION_ITERATIONS),
            crossing_minimization_permutations: bag.get(&CROSSING_MINIMIZATION_PERMUTATIONS),
            seed: bag.get(&SEED),
            node_margin: bag.get(&NODE_MARGIN),
            dummy_margin: bag.get(&DUMMY_MARGIN),
            layer_margin: bag.get(&LAYER_MARGIN),
            padding: bag.get(&PADDING),
        }
    }

    pub fn apply_to(&self, bag: &mut PropertyBag) -> Result<()> {
        bag.set(&CYCLE_BREAKING, self.cycle_breaking)?
            .set(&LAYERING, self.layering)?
            .set(&CROSSING_MINIMIZATION, self.crossing_minimization)?
            .set(&NODE_PLACEMENT, self.node_placement)?
            .set(&EDGE_ROUTING, self.edge_routing)?
            .set(
                &CROSSING_MINIMIZATION_ITERATIONS,
                self.crossing_minimization_iterations,
            )?
            .set(
                &CROSSING_MINIMIZATION_PERMUTATIONS,
                self.crossing_minimization_permutations,
            )?
            .set(&SEED, self.seed)?
            .set(&NODE_MARGIN, self.node_margin)?
            .set(&DUMMY_MARGIN, self.dummy_margin)?
            .set(&LAYER_MARGIN, self.layer_margin)?
            .set(&PADDING, self.padding)?;
        Ok(())
    }
}
