use std::cmp::Ordering;

use serde::Serialize;

/// One hop of a path: `start -> end` with the cost of that hop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment<N> {
    pub start: N,
    pub end: N,
    pub cost: f64,
}

/// An immutable walk from a start node with its accumulated cost.
///
/// A path with no segments has cost 0 and ends where it starts. `extend`
/// returns a new path and leaves the receiver as it was.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<N> {
    start: N,
    cost: f64,
    #[serde(rename = "path")]
    segments: Vec<Segment<N>>,
}

impl<N: Clone> Path<N> {
    /// Zero-cost path containing only `start`.
    pub fn new(start: N) -> Self {
        Self {
            start,
            cost: 0.0,
            segments: Vec::new(),
        }
    }

    /// Append one segment to `next` and set the total cost to `new_total`.
    ///
    /// `new_total` is the cost of the whole new path, not a delta. It must not
    /// be below `self.cost()`; the engine guarantees this through
    /// non-negative weights.
    pub fn extend(&self, next: N, new_total: f64) -> Self {
        self.append(next, new_total - self.cost, new_total)
    }

    /// Append one segment to `next` over an edge of cost `weight`.
    ///
    /// The segment records `weight` as given, and the total becomes
    /// `self.cost() + weight`.
    pub fn extend_by(&self, next: N, weight: f64) -> Self {
        self.append(next, weight, self.cost + weight)
    }

    fn append(&self, next: N, hop: f64, new_total: f64) -> Self {
        debug_assert!(
            new_total >= self.cost,
            "path cost must not decrease: {} -> {}",
            self.cost,
            new_total
        );
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(Segment {
            start: self.end().clone(),
            end: next,
            cost: hop,
        });
        Self {
            start: self.start.clone(),
            cost: new_total,
            segments,
        }
    }
}

impl<N> Path<N> {
    /// Assemble a path from already-ordered segments. `cost` is taken as the
    /// total so it matches the search's accumulated value exactly.
    pub(crate) fn from_parts(start: N, segments: Vec<Segment<N>>, cost: f64) -> Self {
        Self {
            start,
            cost,
            segments,
        }
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    /// Last segment's end, or the start node for an empty path.
    pub fn end(&self) -> &N {
        self.segments.last().map_or(&self.start, |s| &s.end)
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment<N>] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment<N>> {
        self.segments.iter()
    }

    /// Order by cost alone. Equal-cost paths compare equal regardless of route.
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a Segment<N>;
    type IntoIter = std::slice::Iter<'a, Segment<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
