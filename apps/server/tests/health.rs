mod common;

use axum::body::to_bytes;
use tower::ServiceExt;

use common::{get, test_app};

#[tokio::test]
async fn healthz_works() {
    let (app, _tmp, _config) = test_app().await;

    let response = app.oneshot(get("/api/v1/healthz")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, "ok".as_bytes());
}

#[tokio::test]
async fn missing_catalog_fails_startup() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = common::test_config(&tmp);
    config.catalog_path = tmp.path().join("missing.html");
    let err = showroom_server::build_state(&config).await.err().unwrap();
    assert!(err.to_string().contains("Failed to load catalog"));
}
