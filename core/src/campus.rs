use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};

use serde::Serialize;
use tracing::debug;

use crate::adjacency::AdjacencyView;
use crate::dijkstra::dijkstra;
use crate::error::{Error, Result};
use crate::path::Path;
use crate::records::{Building, CampusPath};

/// A 2-D map coordinate used as a graph node.
///
/// Equality and hashing use the bit pattern of each component, with `-0.0`
/// folded into `0.0`, so coordinates parsed from the same text always meet.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn key(&self) -> (u64, u64) {
        fn bits(v: f64) -> u64 {
            if v == 0.0 {
                0.0f64.to_bits()
            } else {
                v.to_bits()
            }
        }
        (bits(self.x), bits(self.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Building naming table plus the raw segment list they sit on.
///
/// The adjacency view is rebuilt for every query and dropped afterwards, so
/// a shared `CampusMap` can serve concurrent readers.
#[derive(Debug, Clone)]
pub struct CampusMap {
    buildings: HashMap<String, Building>,
    paths: Vec<CampusPath>,
}

impl CampusMap {
    /// Later buildings with a repeated short name replace earlier ones.
    pub fn new(buildings: Vec<Building>, paths: Vec<CampusPath>) -> Self {
        let buildings = buildings
            .into_iter()
            .map(|b| (b.short_name.clone(), b))
            .collect();
        Self { buildings, paths }
    }

    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.buildings.contains_key(short_name)
    }

    pub fn building(&self, short_name: &str) -> Option<&Building> {
        self.buildings.get(short_name)
    }

    pub fn long_name_for_short(&self, short_name: &str) -> Result<&str> {
        self.resolve(short_name).map(|b| b.long_name.as_str())
    }

    /// Short name to long name, sorted by short name.
    pub fn building_names(&self) -> BTreeMap<&str, &str> {
        self.buildings
            .values()
            .map(|b| (b.short_name.as_str(), b.long_name.as_str()))
            .collect()
    }

    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Symmetric view over every path segment.
    pub fn adjacency(&self) -> Result<AdjacencyView<Point>> {
        AdjacencyView::from_segments(self.paths.iter().map(|p| {
            let (a, b) = p.endpoints();
            (a, b, p.distance)
        }))
    }

    /// Cheapest walk between two buildings.
    ///
    /// Fails with `UnknownBuilding` if either name does not resolve (start is
    /// checked first). `Ok(None)` means both exist but are not connected.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> Result<Option<Path<Point>>> {
        let from = self.resolve(start)?.location();
        let to = self.resolve(end)?.location();

        let view = self.adjacency()?;
        let result = dijkstra(&view, &from, &to);
        debug!(
            start,
            end,
            view_nodes = view.node_count(),
            settled = result.nodes_settled,
            "campus route query"
        );
        Ok(result.path)
    }

    fn resolve(&self, short_name: &str) -> Result<&Building> {
        self.buildings
            .get(short_name)
            .ok_or_else(|| Error::UnknownBuilding(short_name.to_string()))
    }
}
