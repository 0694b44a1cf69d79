use std::collections::HashMap;

use crate::error::Result;
use crate::graph::{checked_cost, LabeledGraph, Node, Weight};

/// Per-query adjacency view: `node -> {neighbor -> weight}`.
///
/// Built in full before a search and treated as read-only by the engine.
/// Repeated insertions between the same ordered pair keep the cheapest weight.
#[derive(Debug, Clone)]
pub struct AdjacencyView<N> {
    adj: HashMap<N, HashMap<N, f64>>,
}

impl<N: Node> AdjacencyView<N> {
    pub fn new() -> Self {
        Self { adj: HashMap::new() }
    }

    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            adj: HashMap::with_capacity(node_count),
        }
    }

    /// Insert the directed edge `from -> to`.
    pub fn insert(&mut self, from: N, to: N, weight: f64) -> Result<()> {
        let weight = checked_cost(&from, &to, weight)?;
        self.adj
            .entry(from)
            .or_default()
            .entry(to)
            .and_modify(|w| *w = w.min(weight))
            .or_insert(weight);
        Ok(())
    }

    /// Insert both `a -> b` and `b -> a`.
    pub fn insert_undirected(&mut self, a: N, b: N, weight: f64) -> Result<()> {
        self.insert(a.clone(), b.clone(), weight)?;
        self.insert(b, a, weight)
    }

    /// Build a symmetric view from undirected weighted segments.
    pub fn from_segments<I>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let segments = segments.into_iter();
        let mut view = Self::with_capacity(segments.size_hint().0);
        for (a, b, weight) in segments {
            view.insert_undirected(a, b, weight)?;
        }
        Ok(view)
    }

    /// Build the directed view of a labeled graph. Parallel edges collapse to
    /// their cheapest label. Every graph node is present as a key, even
    /// without outgoing edges.
    pub fn from_graph<L>(graph: &LabeledGraph<N, L>) -> Result<Self>
    where
        L: PartialEq + Weight,
    {
        let mut view = Self::with_capacity(graph.size());
        for parent in graph.nodes() {
            view.adj.entry(parent.clone()).or_default();
            for edge in graph.edges(parent)? {
                view.insert(parent.clone(), edge.child().clone(), edge.label().cost())?;
            }
        }
        Ok(view)
    }

    /// Neighbors of `node` with their weights. A node without a key has none.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, f64)> + 'a {
        self.adj
            .get(node)
            .into_iter()
            .flat_map(|m| m.iter().map(|(n, &w)| (n, w)))
    }

    pub fn weight(&self, from: &N, to: &N) -> Option<f64> {
        self.adj.get(from).and_then(|m| m.get(to)).copied()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adj.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Directed edge count (an undirected segment counts twice).
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(HashMap::len).sum()
    }
}

impl<N: Node> Default for AdjacencyView<N> {
    fn default() -> Self {
        Self::new()
    }
}
