use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};

/// A graph vertex: any value compared purely by payload equality.
///
/// Nodes carry no identity beyond their value, so a node constructed anywhere
/// can be used to query any graph.
pub trait Node: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Node for T {}

/// Narrows an edge label to a numeric cost.
///
/// Only labels implementing this trait can be used where the shortest-path
/// engine needs a weight, so a non-numeric label is rejected at compile time
/// instead of failing mid-search.
pub trait Weight {
    fn cost(&self) -> f64;
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(impl Weight for $t {
            #[inline]
            fn cost(&self) -> f64 {
                *self as f64
            }
        })*
    };
}

impl_weight!(f64, f32, u32, u64, i32, i64);

/// Reject costs the engine cannot handle (negative, NaN or infinite).
pub(crate) fn checked_cost<N: Debug>(from: &N, to: &N, cost: f64) -> Result<f64> {
    if !cost.is_finite() || cost < 0.0 {
        Err(Error::invalid_weight(from, to, cost))
    } else {
        Ok(cost)
    }
}

/// A directed labeled edge, stored under its parent node.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<N, L> {
    child: N,
    label: L,
}

impl<N, L> Edge<N, L> {
    pub fn new(child: N, label: L) -> Self {
        Self { child, label }
    }

    pub fn child(&self) -> &N {
        &self.child
    }

    pub fn label(&self) -> &L {
        &self.label
    }
}

/// Mutable directed labeled multigraph.
///
/// Each node key owns the list of its outgoing edges. Parallel edges between
/// the same ordered pair are allowed as long as their labels differ. A child
/// node does not have to be a key itself; it becomes one only through
/// `add_node` or by gaining an outgoing edge.
#[derive(Debug, Clone)]
pub struct LabeledGraph<N, L> {
    adjacency: HashMap<N, Vec<Edge<N, L>>>,
}

impl<N: Node, L: PartialEq> LabeledGraph<N, L> {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Pre-allocate for a known node count.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(node_count),
        }
    }

    /// Add `node` if absent. Returns false if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        let added = match self.adjacency.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Vec::new());
                true
            }
        };
        self.check_rep();
        added
    }

    /// Remove `node` as a key and strip every edge pointing at it.
    /// Removing an absent node is a no-op; always returns true.
    pub fn remove_node(&mut self, node: &N) -> bool {
        self.adjacency.remove(node);
        for edges in self.adjacency.values_mut() {
            edges.retain(|e| e.child != *node);
        }
        self.check_rep();
        true
    }

    /// Insert the edge `parent -> child` with `label`, creating the parent key
    /// if needed. Returns false if an identical edge already exists.
    pub fn add_edge(&mut self, parent: N, child: N, label: L) -> bool {
        let edges = self.adjacency.entry(parent).or_default();
        if edges.iter().any(|e| e.child == child && e.label == label) {
            return false;
        }
        edges.push(Edge::new(child, label));
        self.check_rep();
        true
    }

    /// Remove the edge matching `(parent, child, label)`. Returns whether one was removed.
    pub fn remove_edge(&mut self, parent: &N, child: &N, label: &L) -> bool {
        let Some(edges) = self.adjacency.get_mut(parent) else {
            return false;
        };
        let removed = match edges.iter().position(|e| e.child == *child && e.label == *label) {
            Some(idx) => {
                edges.remove(idx);
                true
            }
            None => false,
        };
        self.check_rep();
        removed
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn has_edge(&self, parent: &N, child: &N, label: &L) -> bool {
        self.adjacency
            .get(parent)
            .is_some_and(|edges| edges.iter().any(|e| e.child == *child && e.label == *label))
    }

    /// Outgoing edges of `parent`, in insertion order.
    ///
    /// Fails with `UnknownNode` if `parent` is not tracked, so a known node
    /// with no edges is distinguishable from one that was never added.
    pub fn edges(&self, parent: &N) -> Result<&[Edge<N, L>]> {
        self.adjacency
            .get(parent)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownNode(format!("{parent:?}")))
    }

    /// Distinct nodes reachable from `parent` over one edge.
    pub fn children(&self, parent: &N) -> Result<HashSet<&N>> {
        Ok(self.edges(parent)?.iter().map(Edge::child).collect())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of distinct node keys.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    fn check_rep(&self) {
        debug_assert!(
            self.adjacency.values().all(|edges| {
                edges
                    .iter()
                    .enumerate()
                    .all(|(i, a)| edges[i + 1..].iter().all(|b| a != b))
            }),
            "duplicate edge under a single parent"
        );
    }
}

impl<N: Node, L: PartialEq + Weight> LabeledGraph<N, L> {
    /// Weight of the first edge found from `parent` to `child`, or infinity if
    /// there is none.
    pub fn edge_weight(&self, parent: &N, child: &N) -> Result<f64> {
        match self.edges(parent)?.iter().find(|e| e.child == *child) {
            Some(edge) => checked_cost(parent, child, edge.label.cost()),
            None => Ok(f64::INFINITY),
        }
    }
}

impl<N: Node, L: PartialEq> Default for LabeledGraph<N, L> {
    fn default() -> Self {
        Self::new()
    }
}
