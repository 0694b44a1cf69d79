//! Router integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use campus_paths_core::{records, CampusMap};
use campus_paths_server::{build_router, DataSource, MapState};
use serde_json::Value;
use tower::ServiceExt;

const BUILDINGS: &str = "shortName,longName,x,y\n\
    BAG,Bagley Hall,0,0\n\
    CSE,Allen Center,10,0\n\
    ISO,Island Observatory,100,100\n";

const PATHS: &str = "x1,y1,x2,y2,distance\n\
    0,0,5,0,5\n\
    5,0,10,0,5\n\
    0,0,10,0,12\n";

fn create_test_app() -> Router {
    let buildings = records::read_buildings(BUILDINGS.as_bytes()).expect("buildings");
    let paths = records::read_paths(PATHS.as_bytes()).expect("paths");
    let state = MapState::new(
        CampusMap::new(buildings, paths),
        DataSource {
            buildings: "buildings.csv".into(),
            paths: "paths.csv".into(),
        },
        Duration::from_millis(3),
    );
    build_router(Arc::new(state))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, body.to_vec())
}

#[tokio::test]
async fn test_find_path_ok() {
    let (status, body) = get(create_test_app(), "/findPath?start=BAG&end=CSE").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(json["cost"], 10.0);
    assert_eq!(json["start"]["x"], 0.0);
    let segments = json["path"].as_array().expect("path array");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["end"]["x"], 5.0);
    assert_eq!(segments[1]["end"]["x"], 10.0);
}

#[tokio::test]
async fn test_find_path_same_building() {
    let (status, body) = get(create_test_app(), "/findPath?start=CSE&end=CSE").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(json["cost"], 0.0);
    assert_eq!(json["path"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_find_path_unreachable_is_null() {
    let (status, body) = get(create_test_app(), "/findPath?start=BAG&end=ISO").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"null");
}

#[tokio::test]
async fn test_find_path_unknown_start_returns_400() {
    let (status, body) = get(create_test_app(), "/findPath?start=NOPE&end=ALSO_NOPE").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let msg = String::from_utf8(body).expect("utf8");
    assert!(msg.contains("'NOPE'"), "unexpected message: {msg}");
}

#[tokio::test]
async fn test_find_path_unknown_end_returns_400() {
    let (status, body) = get(create_test_app(), "/findPath?start=BAG&end=NOPE").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(String::from_utf8(body).expect("utf8").contains("'NOPE'"));
}

#[tokio::test]
async fn test_find_path_missing_param_returns_400() {
    let (status, body) = get(create_test_app(), "/findPath?start=BAG").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"missing query parameter: end");
}

#[tokio::test]
async fn test_buildings_sorted() {
    let (status, body) = get(create_test_app(), "/buildings").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).expect("json");
    let keys: Vec<&String> = json.as_object().expect("object").keys().collect();
    assert_eq!(keys, ["BAG", "CSE", "ISO"]);
    assert_eq!(json["CSE"], "Allen Center");
}

#[tokio::test]
async fn test_status() {
    let (status, body) = get(create_test_app(), "/status").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(json["status"], "loaded");
    assert_eq!(json["building_count"], 3);
    assert_eq!(json["segment_count"], 3);
    assert_eq!(json["paths_file"], "paths.csv");
    let load_ms = json["load_time_ms"].as_f64().expect("load_time_ms");
    assert!((load_ms - 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(create_test_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}
