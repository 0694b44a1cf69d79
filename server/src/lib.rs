//! campus-paths-server: HTTP adapter over campus-paths-core.
//!
//! Loads building and path records once, then answers route queries against
//! the shared read-only map. The server is a thin layer; all graph logic
//! lives in the core crate.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod load;
mod path;
pub mod state;
mod status;

pub use config::Settings;
pub use load::load_map;
pub use path::{find_path, FindPathParams};
pub use state::{DataSource, MapState};
pub use status::{building_names, health_check, status, StatusResponse};

/// Build the router with every route. CORS is permissive so a front-end
/// served from another origin can call it.
pub fn build_router(state: Arc<MapState>) -> Router {
    Router::new()
        .route("/findPath", get(find_path))
        .route("/buildings", get(building_names))
        .route("/status", get(status))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
