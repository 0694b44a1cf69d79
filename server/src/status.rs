use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::MapState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub buildings_file: String,
    pub paths_file: String,
    pub building_count: usize,
    pub segment_count: usize,
    pub load_time_ms: f64,
    pub uptime_secs: u64,
}

/// `GET /status`: what was loaded, from where, and how long ago.
pub async fn status(State(state): State<Arc<MapState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "loaded",
        buildings_file: state.source.buildings.display().to_string(),
        paths_file: state.source.paths.display().to_string(),
        building_count: state.map.building_count(),
        segment_count: state.map.path_count(),
        load_time_ms: state.load_time_ms,
        uptime_secs: state.loaded_at.elapsed().as_secs(),
    })
}

/// `GET /buildings`: short name to long name, sorted by short name.
pub async fn building_names(State(state): State<Arc<MapState>>) -> Json<BTreeMap<String, String>> {
    Json(
        state
            .map
            .building_names()
            .into_iter()
            .map(|(short, long)| (short.to_string(), long.to_string()))
            .collect(),
    )
}

pub async fn health_check() -> &'static str {
    "ok"
}
