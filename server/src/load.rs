use std::time::Instant;

use campus_paths_core::{records, CampusMap, Result};
use tracing::{info, warn};

use crate::state::{DataSource, MapState};

/// Parse both record files and build the shared map state.
///
/// The segment list is turned into a view once here so that negative or
/// malformed distances fail the load instead of a later query.
pub fn load_map(source: &DataSource) -> Result<MapState> {
    let start = Instant::now();

    let buildings = records::load_buildings(&source.buildings)?;
    let paths = records::load_paths(&source.paths)?;
    let map = CampusMap::new(buildings, paths);

    let view = map.adjacency()?;
    let detached: Vec<&str> = map
        .building_names()
        .into_keys()
        .filter(|short| {
            map.building(short)
                .is_some_and(|b| !view.contains(&b.location()))
        })
        .collect();
    if !detached.is_empty() {
        warn!(
            count = detached.len(),
            buildings = ?detached,
            "buildings not on any path segment; routes to them will only match themselves"
        );
    }

    let state = MapState::new(map, source.clone(), start.elapsed());
    info!(
        buildings = state.map.building_count(),
        segments = state.map.path_count(),
        nodes = view.node_count(),
        load_time_ms = state.load_time_ms,
        "campus map loaded"
    );
    Ok(state)
}
