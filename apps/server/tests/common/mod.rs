#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use serde_json::Value;
use showroom_server::{api::app_router, build_state, config::Config};
use tempfile::TempDir;

pub fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/catalog.html")
}

/// Config pointing at a temp data dir, the bundled catalog, and no
/// geolocation so tests never touch the network.
pub fn test_config(data_dir: &TempDir) -> Config {
    let mut config = Config::from_env().unwrap();
    config.data_dir = data_dir.path().to_path_buf();
    config.catalog_path = catalog_path();
    config.geo_base_url = None;
    config.cors_allow = vec!["*".into()];
    config
}

pub async fn test_app() -> (Router, TempDir, Config) {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(&tmp);
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp, config)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
