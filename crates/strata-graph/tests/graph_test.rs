use strata_graph::{Graph, GraphError, NodeId, alg};

fn new_graph() -> Graph<u32, u32, ()> {
    Graph::new()
}

#[test]
fn set_node_reuses_the_handle_for_an_existing_name() {
    let mut g = new_graph();
    let a = g.set_node("a", 1);
    let again = g.set_node("a", 2);
    assert_eq!(a, again);
    assert_eq!(g.node(a), Some(&2));
    assert_eq!(g.node_count(), 1);
}

#[test]
fn nodes_are_listed_in_insertion_order() {
    let mut g = new_graph();
    let c = g.ensure_node("c");
    let a = g.ensure_node("a");
    let b = g.ensure_node("b");
    assert_eq!(g.node_ids(), vec![c, a, b]);
}

#[test]
fn removed_handles_stay_dead() {
    let mut g = new_graph();
    let a = g.ensure_node("a");
    let b = g.ensure_node("b");
    let e = g.set_edge("a", "b");

    assert!(g.remove_node(a));
    assert!(!g.contains_node(a));
    assert!(!g.contains_edge(e));
    assert!(g.in_edges(b).is_empty());
    assert_eq!(g.edge_count(), 0);

    let c = g.ensure_node("a");
    assert_ne!(a, c);
    assert!(g.node(a).is_none());
    assert!(!g.remove_node(a));
}

#[test]
fn adjacency_follows_edge_direction() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c"]);
    let a = g.node_id("a").unwrap();
    let b = g.node_id("b").unwrap();
    let c = g.node_id("c").unwrap();

    assert_eq!(g.successors(a), vec![b]);
    assert_eq!(g.predecessors(c), vec![b]);
    assert_eq!(g.sources(), vec![a]);
    assert_eq!(g.sinks(), vec![c]);
}

#[test]
fn reverse_edge_twice_restores_endpoints() {
    let mut g = new_graph();
    let e = g.set_edge("a", "b");
    let a = g.node_id("a").unwrap();
    let b = g.node_id("b").unwrap();

    g.reverse_edge(e).unwrap();
    assert_eq!(g.endpoints(e), Some((b, a)));
    assert_eq!(g.out_edges(b), &[e]);
    assert_eq!(g.in_edges(a), &[e]);

    g.reverse_edge(e).unwrap();
    assert_eq!(g.endpoints(e), Some((a, b)));
    assert_eq!(g.out_edges(a), &[e]);
    assert!(g.out_edges(b).is_empty());
}

#[test]
fn set_endpoints_rewires_adjacency() {
    let mut g = new_graph();
    let e = g.set_edge("a", "b");
    let a = g.node_id("a").unwrap();
    let b = g.node_id("b").unwrap();
    let c = g.ensure_node("c");

    g.set_endpoints(e, a, c).unwrap();
    assert!(g.in_edges(b).is_empty());
    assert_eq!(g.in_edges(c), &[e]);
}

#[test]
fn hyper_edges_are_not_simple() {
    let mut g = new_graph();
    let a = g.ensure_node("a");
    let b = g.ensure_node("b");
    let c = g.ensure_node("c");
    let e = g.add_hyper_edge(vec![a], vec![b, c], 0).unwrap();

    assert!(!g.is_simple_edge(e));
    assert_eq!(g.target(e), Some(b));
    assert_eq!(g.in_edges(c), &[e]);
    assert_eq!(
        g.add_hyper_edge(vec![], vec![b], 0),
        Err(GraphError::EmptyEndpoints)
    );
}

#[test]
fn add_edge_rejects_dead_handles() {
    let mut g = new_graph();
    let a = g.ensure_node("a");
    let b = g.ensure_node("b");
    g.remove_node(b);
    assert_eq!(g.add_edge(a, b, 0), Err(GraphError::MissingNode(b)));
}

#[test]
fn removing_a_parent_clears_children() {
    let mut g = new_graph();
    let p = g.ensure_node("p");
    let c = g.ensure_node("c");
    g.set_parent(c, p).unwrap();
    assert_eq!(g.children(p), vec![c]);
    g.remove_node(p);
    assert_eq!(g.parent(c), None);
}

#[test]
fn clear_parent_detaches_only_that_child() {
    let mut g = new_graph();
    let p = g.ensure_node("p");
    let a = g.ensure_node("a");
    let b = g.ensure_node("b");
    g.set_parent(a, p).unwrap();
    g.set_parent(b, p).unwrap();

    g.clear_parent(a);
    assert_eq!(g.parent(a), None);
    assert_eq!(g.children(p), vec![b]);
}

#[test]
fn find_cycles_reports_sccs_and_self_loops() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c", "a"]);
    g.set_edge("d", "d");
    g.set_edge("c", "e");

    let name = |v: NodeId| g.node_name(v).unwrap().to_string();
    let cycles: Vec<Vec<String>> = alg::find_cycles(&g)
        .into_iter()
        .map(|c| c.into_iter().map(name).collect())
        .collect();
    assert_eq!(
        cycles,
        vec![
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["d".to_string()]
        ]
    );
    assert!(!alg::is_acyclic(&g));
}

#[test]
fn topsort_orders_a_dag() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "d"]);
    g.set_path(&["a", "c", "d"]);
    let order = alg::topsort(&g).unwrap();
    let pos = |n: &str| {
        let id = g.node_id(n).unwrap();
        order.iter().position(|&v| v == id).unwrap()
    };
    assert!(pos("a") < pos("b"));
    assert!(pos("b") < pos("d"));
    assert!(pos("c") < pos("d"));
}
