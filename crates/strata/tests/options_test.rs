use serde_json::json;
use strata::graphlib::PropertyBag;
use strata::options::{
    self, CrossingMinimizationStrategy, CycleBreakingStrategy, LayeringStrategy,
    NodePlacementStrategy,
};
use strata::{Error, LayoutOptions, Padding};

#[test]
fn defaults_match_the_declared_properties() {
    let opts = LayoutOptions::default();
    assert_eq!(opts.cycle_breaking, CycleBreakingStrategy::Greedy);
    assert_eq!(opts.layering, LayeringStrategy::LongestPath);
    assert_eq!(
        opts.crossing_minimization,
        CrossingMinimizationStrategy::Barycenter
    );
    assert_eq!(opts.node_placement, NodePlacementStrategy::Constraint);
    assert_eq!(opts.crossing_minimization_iterations, 5);
    assert_eq!(opts.crossing_minimization_permutations, 5);
    assert_eq!(opts.seed, 42007);
    assert_eq!(opts.node_margin, 20.0);
    assert_eq!(opts.dummy_margin, 20.0);
    assert_eq!(opts.layer_margin, 20.0);
    assert_eq!(opts.padding, Padding::uniform(12.0));
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let opts = LayoutOptions::from_json(
        r#"{ "layering": "topological", "seed": 7, "padding": { "left": 3.0 } }"#,
    )
    .unwrap();
    assert_eq!(opts.layering, LayeringStrategy::Topological);
    assert_eq!(opts.seed, 7);
    assert_eq!(opts.padding.left, 3.0);
    assert_eq!(opts.padding.top, 12.0);
    assert_eq!(opts.node_placement, NodePlacementStrategy::Constraint);
}

#[test]
fn from_json_rejects_unknown_strategies() {
    let err = LayoutOptions::from_json(r#"{ "layering": "network_simplex" }"#).unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));
}

#[test]
fn options_round_trip_through_a_property_bag() {
    let opts = LayoutOptions {
        node_placement: NodePlacementStrategy::Stacking,
        crossing_minimization_permutations: 2,
        padding: Padding::uniform(0.0),
        ..Default::default()
    };
    let mut bag = PropertyBag::new();
    opts.apply_to(&mut bag).unwrap();

    assert_eq!(bag.get(&options::NODE_PLACEMENT), NodePlacementStrategy::Stacking);
    assert_eq!(LayoutOptions::from_properties(&bag), opts);
}

#[test]
fn from_properties_reads_raw_json_values() {
    let mut bag = PropertyBag::new();
    bag.set_value(options::CYCLE_BREAKING.id(), json!("noop"));
    bag.set_value(options::NODE_MARGIN.id(), json!(5));
    bag.set_value(options::DUMMY_MARGIN.id(), json!(2.5));

    let opts = LayoutOptions::from_properties(&bag);
    assert_eq!(opts.cycle_breaking, CycleBreakingStrategy::Noop);
    assert_eq!(opts.node_margin, 5.0);
    assert_eq!(opts.spacing().dummy, 2.5);
    assert_eq!(opts.spacing().layer, 20.0);
}
