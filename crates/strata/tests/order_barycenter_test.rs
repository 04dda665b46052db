use rand::SeedableRng;
use rand::rngs::StdRng;
use strata::graphlib::NodeId;
use strata::order::{self, BarycenterSettings, cross_count, two_layer_cross_count};
use strata::{LayoutGraph, NodeLabel};

fn new_graph() -> LayoutGraph {
    LayoutGraph::new()
}

fn add_layered(g: &mut LayoutGraph, layer: usize, names: &[&str]) {
    for n in names {
        g.set_node(
            *n,
            NodeLabel {
                layer: Some(layer),
                ..Default::default()
            },
        );
    }
}

fn ids(g: &LayoutGraph, names: &[&str]) -> Vec<NodeId> {
    names.iter().map(|n| g.node_id(n).unwrap()).collect()
}

/// Two layers of two nodes, three edges, one avoidable crossing.
fn crossed_pair() -> LayoutGraph {
    let mut g = new_graph();
    add_layered(&mut g, 0, &["a1", "a2"]);
    add_layered(&mut g, 1, &["b1", "b2"]);
    g.set_edge("a1", "b2");
    g.set_edge("a2", "b1");
    g.set_edge("a2", "b2");
    g
}

#[test]
fn reorder_layer_removes_an_avoidable_crossing() {
    let g = crossed_pair();
    let layering = order::init_order(&g);
    assert_eq!(cross_count(&g, &layering), 1);

    let reordered = order::reorder_layer(&g, &layering, 1, 0);
    assert_eq!(reordered, ids(&g, &["b2", "b1"]));
    assert_eq!(two_layer_cross_count(&g, &layering[0], &reordered), 0);
}

#[test]
fn reorder_layer_never_increases_crossings_of_the_pair() {
    let mut g = new_graph();
    add_layered(&mut g, 0, &["a1", "a2", "a3"]);
    add_layered(&mut g, 1, &["b1", "b2", "b3"]);
    g.set_edge("a1", "b1");
    g.set_edge("a1", "b3");
    g.set_edge("a2", "b2");
    g.set_edge("a3", "b1");
    let layering = order::init_order(&g);
    let before = two_layer_cross_count(&g, &layering[0], &layering[1]);

    let down = order::reorder_layer(&g, &layering, 1, 0);
    assert!(two_layer_cross_count(&g, &layering[0], &down) <= before);

    let up = order::reorder_layer(&g, &layering, 0, 1);
    assert!(two_layer_cross_count(&g, &up, &layering[1]) <= before);
}

#[test]
fn reorder_layer_keeps_nodes_without_neighbours_near_their_slot() {
    let mut g = new_graph();
    add_layered(&mut g, 0, &["a1"]);
    add_layered(&mut g, 1, &["lonely", "b1"]);
    g.set_edge("a1", "b1");
    let layering = order::init_order(&g);

    let reordered = order::reorder_layer(&g, &layering, 1, 0);
    assert_eq!(reordered, ids(&g, &["b1", "lonely"]));
}

#[test]
fn barycenter_finds_a_crossing_free_order() {
    let g = crossed_pair();
    let settings = BarycenterSettings {
        iterations: 5,
        permutations: 5,
    };
    let mut rng = StdRng::seed_from_u64(42007);

    let (layering, crossings) = order::barycenter(&g, order::init_order(&g), settings, &mut rng);
    assert_eq!(crossings, 0);
    assert_eq!(cross_count(&g, &layering), 0);
    assert_eq!(layering.len(), 2);
    assert_eq!(layering[0].len(), 2);
    assert_eq!(layering[1].len(), 2);
}

#[test]
fn barycenter_is_deterministic_for_a_fixed_seed() {
    let mut g = new_graph();
    add_layered(&mut g, 0, &["a", "b", "c", "d"]);
    add_layered(&mut g, 1, &["e", "f", "g", "h"]);
    add_layered(&mut g, 2, &["i", "j", "k"]);
    for (v, w) in [
        ("a", "h"),
        ("b", "f"),
        ("c", "e"),
        ("d", "g"),
        ("a", "f"),
        ("e", "k"),
        ("f", "i"),
        ("g", "j"),
        ("h", "i"),
    ] {
        g.set_edge(v, w);
    }
    let settings = BarycenterSettings {
        iterations: 4,
        permutations: 3,
    };

    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        order::barycenter(&g, order::init_order(&g), settings, &mut rng)
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn barycenter_without_restarts_still_sweeps() {
    let g = crossed_pair();
    let settings = BarycenterSettings {
        iterations: 1,
        permutations: 0,
    };
    let mut rng = StdRng::seed_from_u64(0);

    let (layering, crossings) = order::barycenter(&g, order::init_order(&g), settings, &mut rng);
    assert_eq!(crossings, 0);
    assert_eq!(layering[0], ids(&g, &["a1", "a2"]));
}

#[test]
fn keep_order_follows_the_child_list() {
    let mut g = crossed_pair();
    order::keep_order(&mut g);
    for (name, pos) in [("a1", 0), ("a2", 1), ("b1", 0), ("b2", 1)] {
        let v = g.node_id(name).unwrap();
        assert_eq!(g.node(v).unwrap().position_in_layer, Some(pos));
    }
}
