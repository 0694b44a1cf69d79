use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::adjacency::AdjacencyView;
use crate::graph::Node;
use crate::path::{Path, Segment};

/// Outcome of a single shortest-path query.
#[derive(Debug, Clone)]
pub struct SearchResult<N> {
    /// Minimum-cost path, or None if the destination is unreachable.
    pub path: Option<Path<N>>,
    /// Nodes whose minimal cost was finalized before the search stopped.
    pub nodes_settled: usize,
    /// Candidate paths pushed onto the frontier, seed included.
    pub paths_pushed: usize,
}

/// Frontier entry. `BinaryHeap` is a max-heap, so the cost order is reversed
/// to pop the cheapest candidate first.
struct Candidate<N>(Path<N>);

impl<N> PartialEq for Candidate<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Candidate<N> {}

impl<N> PartialOrd for Candidate<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Candidate<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp_cost(&self.0)
    }
}

/// Lazy-deletion Dijkstra from `start` to `dest` over `view`.
///
/// No decrease-key: every relaxation pushes a fresh candidate, and stale
/// entries are discarded when their end node is already settled. The frontier
/// can therefore hold up to O(edges) paths. Weights in the view are
/// non-negative by construction, so the first time `dest` is popped its cost
/// is minimal and the search stops there.
///
/// Terminates on any finite view, including disconnected ones. `start == dest`
/// yields the zero-cost path even if `start` has no entry in the view.
pub fn dijkstra<N: Node>(view: &AdjacencyView<N>, start: &N, dest: &N) -> SearchResult<N> {
    let mut frontier = BinaryHeap::new();
    let mut settled: HashSet<N> = HashSet::new();
    let mut found = None;
    let mut paths_pushed = 1;

    frontier.push(Candidate(Path::new(start.clone())));

    while let Some(Candidate(path)) = frontier.pop() {
        if path.end() == dest {
            found = Some(path);
            break;
        }
        if settled.contains(path.end()) {
            continue;
        }

        for (child, weight) in view.neighbors(path.end()) {
            if !settled.contains(child) {
                frontier.push(Candidate(path.extend_by(child.clone(), weight)));
                paths_pushed += 1;
            }
        }
        settled.insert(path.end().clone());
    }

    debug!(
        ?start,
        ?dest,
        found = found.is_some(),
        cost = found.as_ref().map(Path::cost),
        settled = settled.len(),
        pushed = paths_pushed,
        "dijkstra search finished"
    );

    SearchResult {
        path: found,
        nodes_settled: settled.len(),
        paths_pushed,
    }
}

/// Minimum-cost path from `start` to `dest`, or None if unreachable.
pub fn shortest_path<N: Node>(view: &AdjacencyView<N>, start: &N, dest: &N) -> Option<Path<N>> {
    dijkstra(view, start, dest).path
}

/// Settled node of a [`ShortestPathTree`]: its minimal cost, hop count and
/// the hop that reached it. The root has no parent.
#[derive(Debug, Clone)]
struct Reached<N> {
    cost: f64,
    hops: usize,
    parent: Option<(N, f64)>,
}

/// Minimum-cost routes from one root to every node it reaches.
///
/// Stores parent pointers instead of cloning a path per node; a [`Path`] is
/// only rebuilt when [`path_to`](Self::path_to) asks for one.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N> {
    root: N,
    reached: HashMap<N, Reached<N>>,
}

impl<N: Node> ShortestPathTree<N> {
    pub fn root(&self) -> &N {
        &self.root
    }

    /// Number of reached nodes, the root included.
    pub fn len(&self) -> usize {
        self.reached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reached.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.reached.contains_key(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.reached.keys()
    }

    /// Minimal cost from the root, or None if `node` is unreachable.
    pub fn cost(&self, node: &N) -> Option<f64> {
        self.reached.get(node).map(|r| r.cost)
    }

    /// Segment count of the route to `node`.
    pub fn depth(&self, node: &N) -> Option<usize> {
        self.reached.get(node).map(|r| r.hops)
    }

    /// Rebuild the route to `node` by walking parent pointers back to the root.
    pub fn path_to(&self, node: &N) -> Option<Path<N>> {
        let mut entry = self.reached.get(node)?;
        let total = entry.cost;
        let mut segments = Vec::with_capacity(entry.hops);
        let mut current = node;

        while let Some((parent, weight)) = &entry.parent {
            segments.push(Segment {
                start: parent.clone(),
                end: current.clone(),
                cost: *weight,
            });
            current = parent;
            entry = self.reached.get(parent)?;
        }

        segments.reverse();
        Some(Path::from_parts(self.root.clone(), segments, total))
    }
}

/// Tree frontier entry, ordered cheapest first like [`Candidate`].
struct Branch<N> {
    cost: f64,
    hops: usize,
    node: N,
    parent: Option<(N, f64)>,
}

impl<N> PartialEq for Branch<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Branch<N> {}

impl<N> PartialOrd for Branch<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Branch<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

/// Single-source form: the minimum-cost route to every node reachable from
/// `start`. `start` itself is reached at cost 0.
///
/// Same lazy-deletion loop as [`dijkstra`], but frontier entries carry only
/// a cost and a parent, so memory stays proportional to the edges relaxed.
pub fn shortest_path_tree<N: Node>(view: &AdjacencyView<N>, start: &N) -> ShortestPathTree<N> {
    let mut frontier = BinaryHeap::new();
    let mut reached: HashMap<N, Reached<N>> = HashMap::new();

    frontier.push(Branch {
        cost: 0.0,
        hops: 0,
        node: start.clone(),
        parent: None,
    });

    while let Some(Branch {
        cost,
        hops,
        node,
        parent,
    }) = frontier.pop()
    {
        if reached.contains_key(&node) {
            continue;
        }
        for (child, weight) in view.neighbors(&node) {
            if !reached.contains_key(child) {
                frontier.push(Branch {
                    cost: cost + weight,
                    hops: hops + 1,
                    node: child.clone(),
                    parent: Some((node.clone(), weight)),
                });
            }
        }
        reached.insert(node, Reached { cost, hops, parent });
    }

    debug!(?start, reached = reached.len(), "shortest path tree built");
    ShortestPathTree {
        root: start.clone(),
        reached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::LabeledGraph;
    use proptest::prelude::*;

    fn directed(edges: &[(&'static str, &'static str, f64)]) -> AdjacencyView<&'static str> {
        let mut view = AdjacencyView::new();
        for &(a, b, w) in edges {
            view.insert(a, b, w).unwrap();
        }
        view
    }

    fn hops<N: Clone>(path: &Path<N>) -> Vec<N> {
        std::iter::once(path.start().clone())
            .chain(path.iter().map(|s| s.end.clone()))
            .collect()
    }

    #[test]
    fn test_chain() {
        let mut g: LabeledGraph<&str, f64> = LabeledGraph::new();
        for n in ["n1", "n2", "n3"] {
            g.add_node(n);
        }
        g.add_edge("n1", "n2", 2.0);
        g.add_edge("n2", "n3", 3.0);
        let view = AdjacencyView::from_graph(&g).unwrap();

        let path = shortest_path(&view, &"n1", &"n3").unwrap();
        assert_eq!(hops(&path), vec!["n1", "n2", "n3"]);
        assert_eq!(path.segments()[0].cost, 2.0);
        assert_eq!(path.segments()[1].cost, 3.0);
        assert_eq!(path.cost(), 5.0);
    }

    #[test]
    fn test_self_path() {
        let view = directed(&[("a", "b", 1.0)]);
        let path = shortest_path(&view, &"a", &"a").unwrap();
        assert!(path.is_empty());
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn test_self_path_not_in_view() {
        let view: AdjacencyView<&str> = AdjacencyView::new();
        let path = shortest_path(&view, &"x", &"x").unwrap();
        assert_eq!(*path.end(), "x");
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn test_no_path_disconnected() {
        let view = directed(&[("a", "b", 1.0), ("c", "d", 1.0)]);
        let result = dijkstra(&view, &"a", &"d");
        assert!(result.path.is_none());
        // Exhausted the reachable component only
        assert_eq!(result.nodes_settled, 2);
    }

    #[test]
    fn test_no_path_against_direction() {
        let view = directed(&[("a", "b", 1.0)]);
        assert!(shortest_path(&view, &"b", &"a").is_none());
    }

    #[test]
    fn test_prefers_cheaper_longer_route() {
        //   A --2-- B --1-- D --4-- E
        //   |                       |
        //   +--10-- C ------0-------+
        let view = AdjacencyView::from_segments(vec![
            ("A", "B", 2.0),
            ("A", "C", 10.0),
            ("B", "D", 1.0),
            ("D", "E", 4.0),
            ("C", "E", 0.0),
        ])
        .unwrap();
        let path = shortest_path(&view, &"A", &"E").unwrap();
        assert_eq!(path.cost(), 7.0);
        assert_eq!(hops(&path), vec!["A", "B", "D", "E"]);
    }

    #[test]
    fn test_zero_weight_edges() {
        let view = directed(&[("a", "b", 0.0), ("b", "c", 0.0), ("a", "c", 1.0)]);
        let path = shortest_path(&view, &"a", &"c").unwrap();
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_cycle_terminates() {
        let view = directed(&[("a", "b", 1.0), ("b", "c", 1.0), ("c", "a", 1.0)]);
        let path = shortest_path(&view, &"b", &"a").unwrap();
        assert_eq!(hops(&path), vec!["b", "c", "a"]);
        assert!(shortest_path(&view, &"a", &"zzz").is_none());
    }

    #[test]
    fn test_self_loop_ignored() {
        let view = directed(&[("a", "a", 1.0), ("a", "b", 4.0)]);
        let path = shortest_path(&view, &"a", &"b").unwrap();
        assert_eq!(path.cost(), 4.0);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_parallel_edges_use_cheapest() {
        let mut g: LabeledGraph<&str, f64> = LabeledGraph::new();
        g.add_edge("n1", "n2", 2.0);
        g.add_edge("n1", "n2", 1.0);
        let view = AdjacencyView::from_graph(&g).unwrap();
        assert_eq!(shortest_path(&view, &"n1", &"n2").unwrap().cost(), 1.0);
    }

    #[test]
    fn test_stale_entries_counted() {
        // b is reached twice (via a and via c); the dearer copy is pushed and discarded
        let view = directed(&[("s", "b", 5.0), ("s", "c", 1.0), ("c", "b", 1.0), ("b", "t", 1.0)]);
        let result = dijkstra(&view, &"s", &"t");
        assert_eq!(result.path.unwrap().cost(), 3.0);
        assert!(result.paths_pushed > result.nodes_settled);
    }

    #[test]
    fn test_tree_matches_pairwise() {
        let view = AdjacencyView::from_segments(vec![
            ("a", "b", 1.0),
            ("b", "c", 2.0),
            ("a", "c", 5.0),
            ("c", "d", 1.0),
            ("x", "y", 1.0),
        ])
        .unwrap();
        let tree = shortest_path_tree(&view, &"a");
        assert_eq!(tree.len(), 4);
        assert_eq!(*tree.root(), "a");
        assert_eq!(tree.cost(&"a"), Some(0.0));
        assert!(!tree.contains(&"x"));
        assert!(tree.path_to(&"x").is_none());

        for dest in tree.nodes() {
            let rebuilt = tree.path_to(dest).unwrap();
            let direct = shortest_path(&view, &"a", dest).unwrap();
            assert_eq!(rebuilt, direct);
            assert_eq!(tree.depth(dest), Some(rebuilt.len()));
        }
        assert_eq!(tree.cost(&"d"), Some(4.0));
        assert_eq!(hops(&tree.path_to(&"d").unwrap()), vec!["a", "b", "c", "d"]);
        assert!(tree.path_to(&"a").unwrap().is_empty());
    }

    #[test]
    fn test_tree_root_not_in_view() {
        let view: AdjacencyView<&str> = AdjacencyView::new();
        let tree = shortest_path_tree(&view, &"q");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.path_to(&"q").unwrap().cost(), 0.0);
    }

    #[test]
    fn test_tree_on_grid_rebuilds_on_demand() {
        // 30x30 unit grid: the far corner sits 58 hops from the origin
        let side = 30u32;
        let mut view = AdjacencyView::new();
        for id in 0..side * side {
            if id % side + 1 < side {
                view.insert_undirected(id, id + 1, 1.0).unwrap();
            }
            if id + side < side * side {
                view.insert_undirected(id, id + side, 1.0).unwrap();
            }
        }
        let far = side * side - 1;
        let tree = shortest_path_tree(&view, &0);
        assert_eq!(tree.len(), (side * side) as usize);
        assert_eq!(tree.cost(&far), Some(58.0));
        assert_eq!(tree.depth(&far), Some(58));

        let path = tree.path_to(&far).unwrap();
        assert_eq!(path.cost(), shortest_path(&view, &0, &far).unwrap().cost());
        assert!(path.iter().all(|s| s.cost == 1.0));
    }

    #[test]
    fn test_segment_costs_are_edge_weights() {
        let view = directed(&[("a", "b", 0.1), ("b", "c", 0.2)]);
        let path = shortest_path(&view, &"a", &"c").unwrap();
        let costs: Vec<f64> = path.iter().map(|s| s.cost).collect();
        assert_eq!(costs, vec![0.1, 0.2]);
        assert_eq!(path.cost(), 0.1 + 0.2);
        assert_eq!(shortest_path_tree(&view, &"a").path_to(&"c"), Some(path));
    }

    // --- Optimality against brute force ---

    /// Cheapest simple path by exhaustive DFS. With non-negative weights the
    /// cheapest walk is always a simple path.
    fn brute_force(view: &AdjacencyView<u8>, start: u8, dest: u8) -> Option<f64> {
        fn go(
            view: &AdjacencyView<u8>,
            at: u8,
            dest: u8,
            cost: f64,
            seen: &mut Vec<u8>,
            best: &mut Option<f64>,
        ) {
            if at == dest {
                if best.map_or(true, |b| cost < b) {
                    *best = Some(cost);
                }
                return;
            }
            for (&next, w) in view.neighbors(&at) {
                if !seen.contains(&next) {
                    seen.push(next);
                    go(view, next, dest, cost + w, seen, best);
                    seen.pop();
                }
            }
        }
        let mut best = None;
        go(view, start, dest, 0.0, &mut vec![start], &mut best);
        best
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(
            edges in proptest::collection::vec((0u8..7, 0u8..7, 0u32..20), 0..24),
            start in 0u8..7,
            dest in 0u8..7,
        ) {
            let mut view = AdjacencyView::new();
            for (a, b, w) in edges {
                view.insert(a, b, f64::from(w)).unwrap();
            }

            let found = shortest_path(&view, &start, &dest);
            prop_assert_eq!(found.as_ref().map(Path::cost), brute_force(&view, start, dest));

            let tree = shortest_path_tree(&view, &start);
            prop_assert_eq!(tree.cost(&dest), found.as_ref().map(Path::cost));
            prop_assert_eq!(
                tree.path_to(&dest).map(|p| p.len()),
                tree.depth(&dest)
            );

            if let Some(path) = found {
                prop_assert_eq!(*path.start(), start);
                prop_assert_eq!(*path.end(), dest);
                let mut at = start;
                let mut total = 0.0;
                for seg in &path {
                    prop_assert_eq!(seg.start, at);
                    prop_assert_eq!(view.weight(&seg.start, &seg.end), Some(seg.cost));
                    total += seg.cost;
                    at = seg.end;
                }
                prop_assert_eq!(total, path.cost());
            }
        }
    }
}
