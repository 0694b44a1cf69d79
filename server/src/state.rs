use std::path::PathBuf;
use std::time::{Duration, Instant};

use campus_paths_core::CampusMap;

/// Record files the map was loaded from.
#[derive(Debug, Clone)]
pub struct DataSource {
    pub buildings: PathBuf,
    pub paths: PathBuf,
}

/// The loaded campus map plus load metadata.
///
/// Built once at startup and shared read-only behind an `Arc`. Every query
/// derives its own adjacency view, so overlapping requests never share
/// search state.
pub struct MapState {
    pub map: CampusMap,
    pub source: DataSource,
    pub load_time_ms: f64,
    pub loaded_at: Instant,
}

impl MapState {
    pub fn new(map: CampusMap, source: DataSource, load_time: Duration) -> Self {
        Self {
            map,
            source,
            load_time_ms: load_time.as_secs_f64() * 1000.0,
            loaded_at: Instant::now(),
        }
    }
}
