use proptest::prelude::*;
use strata::options::{LayeringStrategy, NodePlacementStrategy};
use strata::{
    CancelToken, LayoutGraph, LayoutOptions, LayoutStatus, LayoutWarning, NodeLabel, Point, layout,
    layout_with,
};

fn new_graph() -> LayoutGraph {
    LayoutGraph::new()
}

fn add_nodes(g: &mut LayoutGraph, names: &[&str]) {
    for n in names {
        g.set_node(*n, NodeLabel::new(30.0, 20.0));
    }
}

/// `a -> b -> c -> a` plus `a -> d -> e`.
fn triangle_with_tail() -> LayoutGraph {
    let mut g = new_graph();
    add_nodes(&mut g, &["a", "b", "c", "d", "e"]);
    g.set_path(&["a", "b", "c", "a"]);
    g.set_path(&["a", "d", "e"]);
    g
}

fn node<'a>(g: &'a LayoutGraph, name: &str) -> &'a NodeLabel {
    g.node(g.node_id(name).unwrap()).unwrap()
}

#[test]
fn layout_assigns_layers_consistent_with_the_broken_cycle() {
    let mut g = triangle_with_tail();
    let report = layout(&mut g).unwrap();

    assert_eq!(report.status, LayoutStatus::Completed);
    assert!(report.warnings.is_empty());
    assert_eq!(g.graph().layer_count, 3);
    for (name, layer) in [("a", 0), ("b", 1), ("c", 2), ("d", 1), ("e", 2)] {
        assert_eq!(node(&g, name).layer, Some(layer), "layer of {name}");
    }
}

#[test]
fn layout_restores_original_edges_and_removes_dummies() {
    let mut g = triangle_with_tail();
    let before: Vec<_> = g.edges().map(|e| g.endpoints(e)).collect();
    layout(&mut g).unwrap();

    assert_eq!(g.node_count(), 5);
    assert_eq!(g.edge_count(), 5);
    assert!(g.nodes().all(|v| !g.node(v).unwrap().is_dummy));
    let after: Vec<_> = g.edges().map(|e| g.endpoints(e)).collect();
    assert_eq!(after, before);
    assert!(g.edges().all(|e| !g.edge(e).unwrap().reversed));
}

#[test]
fn layout_routes_the_reversed_long_edge_from_its_true_source() {
    let mut g = triangle_with_tail();
    layout(&mut g).unwrap();

    let ca = g
        .edges()
        .find(|&e| g.endpoints(e) == Some((g.node_id("c").unwrap(), g.node_id("a").unwrap())))
        .unwrap();
    let points = &g.edge(ca).unwrap().points;
    let c = node(&g, "c");
    let a = node(&g, "a");
    assert_eq!(points.len(), 3);
    assert_eq!(points.first(), Some(&Point::new(c.x, c.y + 10.0)));
    assert_eq!(points.last(), Some(&Point::new(a.x + 30.0, a.y + 10.0)));
}

#[test]
fn layout_moves_the_drawing_to_the_padding_origin() {
    let mut g = triangle_with_tail();
    layout(&mut g).unwrap();

    let min_x = g.nodes().map(|v| g.node(v).unwrap().x).fold(f64::INFINITY, f64::min);
    let min_y = g.nodes().map(|v| g.node(v).unwrap().y).fold(f64::INFINITY, f64::min);
    assert_eq!((min_x, min_y), (12.0, 12.0));

    for e in g.edges() {
        for p in &g.edge(e).unwrap().points {
            assert!(p.x >= 12.0 && p.y >= 12.0);
        }
    }
    // Three layers of width 30, 20 apart, plus padding on both sides.
    assert_eq!(g.graph().width, 30.0 * 3.0 + 20.0 * 2.0 + 24.0);
}

#[test]
fn layout_is_deterministic() {
    let mut first = triangle_with_tail();
    let mut second = triangle_with_tail();
    layout(&mut first).unwrap();
    layout(&mut second).unwrap();

    for v in first.nodes() {
        assert_eq!(first.node(v), second.node(v));
    }
    for e in first.edges() {
        assert_eq!(first.edge(e), second.edge(e));
    }
}

#[test]
fn layout_reads_options_from_graph_properties() {
    let mut g = new_graph();
    add_nodes(&mut g, &["a", "b", "c"]);
    g.set_edge("a", "b");
    let opts = LayoutOptions {
        layering: LayeringStrategy::Topological,
        node_placement: NodePlacementStrategy::Simple,
        ..Default::default()
    };
    opts.apply_to(&mut g.graph_mut().properties).unwrap();

    layout(&mut g).unwrap();
    assert_eq!(g.graph().layer_count, 3);
    assert_eq!(node(&g, "a").layer, Some(0));
    assert_eq!(node(&g, "c").layer, Some(1));
    assert_eq!(node(&g, "b").layer, Some(2));
}

#[test]
fn layout_with_a_canceled_token_does_nothing() {
    let mut g = triangle_with_tail();
    let cancel = CancelToken::new();
    cancel.cancel();

    let report = layout_with(&mut g, &LayoutOptions::default(), &cancel).unwrap();
    assert_eq!(report.status, LayoutStatus::Canceled);
    assert!(!report.is_completed());
    assert_eq!(node(&g, "a").layer, None);
}

#[test]
fn layout_warns_about_hyper_edges_and_completes() {
    let mut g = new_graph();
    add_nodes(&mut g, &["a", "b", "c"]);
    let (a, b, c) = (
        g.node_id("a").unwrap(),
        g.node_id("b").unwrap(),
        g.node_id("c").unwrap(),
    );
    let e = g.add_hyper_edge(vec![a], vec![b, c], Default::default()).unwrap();

    let report = layout(&mut g).unwrap();
    assert!(report.is_completed());
    assert_eq!(
        report.warnings,
        vec![LayoutWarning::NonSimpleEdge {
            edge: e,
            sources: 1,
            targets: 2
        }]
    );
}

#[test]
fn layout_keeps_every_endpoint_of_a_long_hyper_edge() {
    let mut g = new_graph();
    add_nodes(&mut g, &["a", "b", "c"]);
    g.set_path(&["a", "b", "c"]);
    let (a, b, c) = (
        g.node_id("a").unwrap(),
        g.node_id("b").unwrap(),
        g.node_id("c").unwrap(),
    );
    let e = g.add_hyper_edge(vec![a], vec![c, b], Default::default()).unwrap();

    let report = layout(&mut g).unwrap();
    assert!(report.is_completed());
    assert_eq!(g.sources_of(e), &[a]);
    assert_eq!(g.targets_of(e), &[c, b]);
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn layout_of_an_empty_graph_has_no_size() {
    let mut g = new_graph();
    let report = layout(&mut g).unwrap();
    assert!(report.is_completed());
    assert_eq!(g.graph().width, 0.0);
    assert_eq!(g.graph().height, 0.0);
}

#[test]
fn every_placement_strategy_keeps_layers_apart() {
    for placement in [
        NodePlacementStrategy::Simple,
        NodePlacementStrategy::Stacking,
        NodePlacementStrategy::Constraint,
    ] {
        let mut g = triangle_with_tail();
        let opts = LayoutOptions {
            node_placement: placement,
            ..Default::default()
        };
        layout_with(&mut g, &opts, &CancelToken::new()).unwrap();

        let (a, b, c) = (node(&g, "a"), node(&g, "b"), node(&g, "c"));
        assert!(a.x + a.width < b.x, "{placement:?}");
        assert!(b.x + b.width < c.x, "{placement:?}");
    }
}

fn dag_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..9).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..20)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn layout_is_reproducible_and_leaves_no_dummies((n, edges) in dag_strategy()) {
        let build = || {
            let mut g = new_graph();
            for i in 0..n {
                g.set_node(format!("n{i}"), NodeLabel::new(10.0 + i as f64, 10.0));
            }
            for &(v, w) in &edges {
                if v != w {
                    g.set_edge(format!("n{v}"), format!("n{w}"));
                }
            }
            g
        };

        let mut first = build();
        let mut second = build();
        prop_assert!(layout(&mut first).unwrap().is_completed());
        layout(&mut second).unwrap();

        prop_assert_eq!(first.node_count(), n);
        for v in first.nodes() {
            let lbl = first.node(v).unwrap();
            prop_assert!(!lbl.is_dummy);
            prop_assert!(lbl.x.is_finite() && lbl.y.is_finite());
            prop_assert_eq!(Some(lbl), second.node(v));
        }
        for e in first.edges() {
            prop_assert!(first.edge(e).unwrap().points.len() >= 2);
        }
    }
}
