//! Graph container APIs used by `strata`.
//!
//! This module contains the core `Graph` container plus a small set of helper algorithms
//! re-exported as `strata_graph::alg`.

mod entries;
mod ids;

pub mod alg;

pub use ids::{EdgeId, NodeId};

use crate::{GraphError, Result};
use entries::{EdgeEntry, NodeEntry};
use rustc_hash::FxHashMap as HashMap;

/// A directed graph whose nodes and edges carry labels of type `N` and `E`, plus one graph-level
/// label `G`.
///
/// Edges normally connect exactly one source to one target. Hyper-edges (several sources or
/// targets) can be created with [`Graph::add_hyper_edge`]; adjacency queries then report the edge
/// on every endpoint, and [`Graph::source`] / [`Graph::target`] return the first endpoint.
#[derive(Debug, Clone)]
pub struct Graph<N, E, G> {
    graph_label: G,

    nodes: Vec<Option<NodeEntry<N>>>,
    node_index: HashMap<String, NodeId>,
    node_count: usize,

    edges: Vec<Option<EdgeEntry<E>>>,
    edge_count: usize,
}

impl<N, E, G> Default for Graph<N, E, G>
where
    G: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, G> Graph<N, E, G>
where
    G: Default,
{
    pub fn new() -> Self {
        Self {
            graph_label: G::default(),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            node_count: 0,
            edges: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<N, E, G> Graph<N, E, G> {
    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    fn node_entry(&self, id: NodeId) -> Option<&NodeEntry<N>> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_entry_mut(&mut self, id: NodeId) -> Option<&mut NodeEntry<N>> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    fn edge_entry(&self, id: EdgeId) -> Option<&EdgeEntry<E>> {
        self.edges.get(id.0).and_then(Option::as_ref)
    }

    fn edge_entry_mut(&mut self, id: EdgeId) -> Option<&mut EdgeEntry<E>> {
        self.edges.get_mut(id.0).and_then(Option::as_mut)
    }

    // ---- nodes -------------------------------------------------------------------------------

    /// Inserts a node named `name`, or replaces the label of the existing node with that name.
    pub fn set_node(&mut self, name: impl Into<String>, label: N) -> NodeId {
        let name = name.into();
        if let Some(&id) = self.node_index.get(&name) {
            if let Some(entry) = self.node_entry_mut(id) {
                entry.label = label;
            }
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(NodeEntry {
            name: name.clone(),
            label,
            parent: None,
            in_edges: Vec::new(),
            out_edges: Vec::new(),
        }));
        self.node_index.insert(name, id);
        self.node_count += 1;
        id
    }

    pub fn ensure_node(&mut self, name: impl Into<String>) -> NodeId
    where
        N: Default,
    {
        let name = name.into();
        if let Some(&id) = self.node_index.get(&name) {
            return id;
        }
        self.set_node(name, N::default())
    }

    pub fn has_node_named(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.node_index.get(name).copied()
    }

    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.node_entry(id).map(|n| n.name.as_str())
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_entry(id).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.node_entry(id).map(|n| &n.label)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.node_entry_mut(id).map(|n| &mut n.label)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Live nodes in insertion order. This is the layout-significant child order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_some())
            .map(|(i, _)| NodeId(i))
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes().collect()
    }

    pub fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(NodeId, &N),
    {
        for (i, n) in self.nodes.iter().enumerate() {
            if let Some(n) = n {
                f(NodeId(i), &n.label);
            }
        }
    }

    pub fn for_each_node_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(NodeId, &mut N),
    {
        for (i, n) in self.nodes.iter_mut().enumerate() {
            if let Some(n) = n {
                f(NodeId(i), &mut n.label);
            }
        }
    }

    /// Removes the node and every edge incident to it. Children of the node become roots.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(entry) = self.nodes.get_mut(id.0).and_then(Option::take) else {
            return false;
        };
        self.node_count -= 1;
        self.node_index.remove(&entry.name);

        let mut incident: Vec<EdgeId> = entry.in_edges;
        incident.extend(entry.out_edges);
        incident.sort_unstable();
        incident.dedup();
        for e in incident {
            self.remove_edge(e);
        }

        for slot in self.nodes.iter_mut().flatten() {
            if slot.parent == Some(id) {
                slot.parent = None;
            }
        }
        true
    }

    // ---- containment -------------------------------------------------------------------------

    pub fn set_parent(&mut self, child: NodeId, parent: NodeId) -> Result<()> {
        if !self.contains_node(parent) {
            return Err(GraphError::MissingNode(parent));
        }
        let entry = self
            .node_entry_mut(child)
            .ok_or(GraphError::MissingNode(child))?;
        entry.parent = Some(parent);
        Ok(())
    }

    pub fn clear_parent(&mut self, child: NodeId) {
        if let Some(entry) = self.node_entry_mut(child) {
            entry.parent = None;
        }
    }

    pub fn parent(&self, child: NodeId) -> Option<NodeId> {
        self.node_entry(child).and_then(|n| n.parent)
    }

    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.nodes()
            .filter(|&v| self.parent(v) == Some(parent))
            .collect()
    }

    // ---- edges -------------------------------------------------------------------------------

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Live edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_some())
            .map(|(i, _)| EdgeId(i))
    }

    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges().collect()
    }

    pub fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(EdgeId, &E),
    {
        for (i, e) in self.edges.iter().enumerate() {
            if let Some(e) = e {
                f(EdgeId(i), &e.label);
            }
        }
    }

    pub fn for_each_edge_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(EdgeId, &mut E),
    {
        for (i, e) in self.edges.iter_mut().enumerate() {
            if let Some(e) = e {
                f(EdgeId(i), &mut e.label);
            }
        }
    }

    pub fn add_edge(&mut self, source: NodeId, target: NodeId, label: E) -> Result<EdgeId> {
        self.add_hyper_edge(vec![source], vec![target], label)
    }

    pub fn add_hyper_edge(
        &mut self,
        sources: Vec<NodeId>,
        targets: Vec<NodeId>,
        label: E,
    ) -> Result<EdgeId> {
        if sources.is_empty() || targets.is_empty() {
            return Err(GraphError::EmptyEndpoints);
        }
        if let Some(&missing) = sources
            .iter()
            .chain(targets.iter())
            .find(|&&v| !self.contains_node(v))
        {
            return Err(GraphError::MissingNode(missing));
        }

        let id = EdgeId(self.edges.len());
        self.attach(id, &sources, &targets);
        self.edges.push(Some(EdgeEntry {
            sources,
            targets,
            label,
        }));
        self.edge_count += 1;
        Ok(id)
    }

    /// Adds an edge between two named nodes, creating missing nodes with default labels.
    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> EdgeId
    where
        N: Default,
    {
        let v = self.ensure_node(v);
        let w = self.ensure_node(w);
        let id = EdgeId(self.edges.len());
        self.attach(id, &[v], &[w]);
        self.edges.push(Some(EdgeEntry {
            sources: vec![v],
            targets: vec![w],
            label,
        }));
        self.edge_count += 1;
        id
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> EdgeId
    where
        N: Default,
        E: Default,
    {
        self.set_edge_with_label(v, w, E::default())
    }

    pub fn set_path(&mut self, names: &[&str]) -> Vec<EdgeId>
    where
        N: Default,
        E: Default,
    {
        names
            .windows(2)
            .map(|pair| self.set_edge(pair[0], pair[1]))
            .collect()
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edge_entry(id).is_some()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&E> {
        self.edge_entry(id).map(|e| &e.label)
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut E> {
        self.edge_entry_mut(id).map(|e| &mut e.label)
    }

    /// First source of the edge.
    pub fn source(&self, id: EdgeId) -> Option<NodeId> {
        self.edge_entry(id).and_then(|e| e.sources.first().copied())
    }

    /// First target of the edge.
    pub fn target(&self, id: EdgeId) -> Option<NodeId> {
        self.edge_entry(id).and_then(|e| e.targets.first().copied())
    }

    pub fn endpoints(&self, id: EdgeId) -> Option<(NodeId, NodeId)> {
        Some((self.source(id)?, self.target(id)?))
    }

    pub fn sources_of(&self, id: EdgeId) -> &[NodeId] {
        self.edge_entry(id).map_or(&[], |e| e.sources.as_slice())
    }

    pub fn targets_of(&self, id: EdgeId) -> &[NodeId] {
        self.edge_entry(id).map_or(&[], |e| e.targets.as_slice())
    }

    /// Exactly one source and exactly one target.
    pub fn is_simple_edge(&self, id: EdgeId) -> bool {
        self.edge_entry(id)
            .is_some_and(|e| e.sources.len() == 1 && e.targets.len() == 1)
    }

    /// Rewires the edge to connect `source` to `target`, dropping any extra hyper-edge endpoints.
    pub fn set_endpoints(&mut self, id: EdgeId, source: NodeId, target: NodeId) -> Result<()> {
        if !self.contains_edge(id) {
            return Err(GraphError::MissingEdge(id));
        }
        for v in [source, target] {
            if !self.contains_node(v) {
                return Err(GraphError::MissingNode(v));
            }
        }
        self.detach(id);
        self.attach(id, &[source], &[target]);
        if let Some(entry) = self.edge_entry_mut(id) {
            entry.sources = vec![source];
            entry.targets = vec![target];
        }
        Ok(())
    }

    /// Swaps the source and target sides of the edge.
    pub fn reverse_edge(&mut self, id: EdgeId) -> Result<()> {
        let (sources, targets) = {
            let entry = self.edge_entry(id).ok_or(GraphError::MissingEdge(id))?;
            (entry.targets.clone(), entry.sources.clone())
        };
        self.detach(id);
        self.attach(id, &sources, &targets);
        if let Some(entry) = self.edge_entry_mut(id) {
            entry.sources = sources;
            entry.targets = targets;
        }
        Ok(())
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        if !self.contains_edge(id) {
            return false;
        }
        self.detach(id);
        self.edges[id.0] = None;
        self.edge_count -= 1;
        true
    }

    fn attach(&mut self, id: EdgeId, sources: &[NodeId], targets: &[NodeId]) {
        for &v in sources {
            if let Some(n) = self.node_entry_mut(v) {
                n.out_edges.push(id);
            }
        }
        for &w in targets {
            if let Some(n) = self.node_entry_mut(w) {
                n.in_edges.push(id);
            }
        }
    }

    fn detach(&mut self, id: EdgeId) {
        let Some(entry) = self.edge_entry(id) else {
            return;
        };
        let sources = entry.sources.clone();
        let targets = entry.targets.clone();
        for v in sources {
            if let Some(n) = self.node_entry_mut(v) {
                n.out_edges.retain(|&e| e != id);
            }
        }
        for w in targets {
            if let Some(n) = self.node_entry_mut(w) {
                n.in_edges.retain(|&e| e != id);
            }
        }
    }

    // ---- adjacency ---------------------------------------------------------------------------

    pub fn out_edges(&self, v: NodeId) -> &[EdgeId] {
        self.node_entry(v).map_or(&[], |n| n.out_edges.as_slice())
    }

    pub fn in_edges(&self, v: NodeId) -> &[EdgeId] {
        self.node_entry(v).map_or(&[], |n| n.in_edges.as_slice())
    }

    pub fn out_degree(&self, v: NodeId) -> usize {
        self.out_edges(v).len()
    }

    pub fn in_degree(&self, v: NodeId) -> usize {
        self.in_edges(v).len()
    }

    pub fn successors(&self, v: NodeId) -> Vec<NodeId> {
        self.out_edges(v)
            .iter()
            .filter_map(|&e| self.target(e))
            .collect()
    }

    pub fn predecessors(&self, v: NodeId) -> Vec<NodeId> {
        self.in_edges(v)
            .iter()
            .filter_map(|&e| self.source(e))
            .collect()
    }

    /// Nodes without incoming edges, in insertion order.
    pub fn sources(&self) -> Vec<NodeId> {
        self.nodes().filter(|&v| self.in_degree(v) == 0).collect()
    }

    /// Nodes without outgoing edges, in insertion order.
    pub fn sinks(&self) -> Vec<NodeId> {
        self.nodes().filter(|&v| self.out_degree(v) == 0).collect()
    }
}
