use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use campus_paths_core::{Error, Path, Point};
use serde::Deserialize;
use tracing::{error, warn};

use crate::state::MapState;

#[derive(Debug, Deserialize)]
pub struct FindPathParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// `GET /findPath?start=<short>&end=<short>`
///
/// 400 if a parameter is missing or names an unknown building (start is
/// checked first). An unreachable destination is a 200 with a `null` body.
pub async fn find_path(
    State(state): State<Arc<MapState>>,
    Query(params): Query<FindPathParams>,
) -> Result<Json<Option<Path<Point>>>, (StatusCode, String)> {
    let start = required(params.start, "start")?;
    let end = required(params.end, "end")?;

    match state.map.find_shortest_path(&start, &end) {
        Ok(path) => Ok(Json(path)),
        Err(Error::UnknownBuilding(name)) => {
            warn!(%start, %end, unknown = %name, "rejected path query");
            Err((
                StatusCode::BAD_REQUEST,
                format!("The building '{name}' does not exist or is not a valid short name."),
            ))
        }
        Err(e) => {
            error!(%start, %end, error = %e, "path query failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "findPath: internal error".to_string(),
            ))
        }
    }
}

fn required(value: Option<String>, name: &str) -> Result<String, (StatusCode, String)> {
    value.filter(|v| !v.is_empty()).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            format!("missing query parameter: {name}"),
        )
    })
}
