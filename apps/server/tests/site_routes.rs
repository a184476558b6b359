mod common;

use axum::{body::Body, http::Request, http::StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, get, json_request, test_app, test_config};
use showroom_server::{api::app_router, build_state};

fn with_headers(uri: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn rates_start_on_static_table() {
    let (app, _tmp, _config) = test_app().await;

    let response = app.oneshot(get("/api/v1/rates")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["source"], "STATIC");
    assert_eq!(body["rates"]["USD"], 1.0);
    assert_eq!(body["rates"]["NGN"], 1550.0);
}

#[tokio::test]
async fn anonymous_page_renders_in_usd() {
    let (app, _tmp, _config) = test_app().await;

    let response = app.oneshot(get("/api/v1/page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;

    assert_eq!(page["currency"], "USD");
    assert_eq!(page["rate"], 1.0);
    assert_eq!(page["rateSource"], "STATIC");

    let texts: Vec<&str> = page["prices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["text"].as_str().unwrap())
        .collect();
    assert_eq!(
        texts,
        vec!["$42,990", "$44,990", "$10 /mo", "$475", "$75.50", "$2.35", "$22"]
    );

    let active: Vec<&str> = page["toggles"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|t| t["active"] == true)
        .map(|t| t["code"].as_str().unwrap())
        .collect();
    assert_eq!(active, vec!["USD"]);

    assert_eq!(page["finance"]["principal"], "$37,990");
    assert_eq!(page["lease"]["residualValue"], "$24,934");
}

#[tokio::test]
async fn accept_language_picks_currency() {
    let (app, _tmp, _config) = test_app().await;

    let response = app
        .oneshot(with_headers(
            "/api/v1/currency",
            &[("accept-language", "en-GB,en;q=0.8")],
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["currency"], "GBP");
    assert_eq!(body["source"], "LOCALE");
}

#[tokio::test]
async fn currency_choice_is_persisted_per_visitor() {
    let (app, tmp, _config) = test_app().await;

    let mut put = json_request("PUT", "/api/v1/currency", json!({ "currency": "eur" }));
    put.headers_mut()
        .insert("x-visitor-id", "visitor-1".parse().unwrap());
    let response = app.clone().oneshot(put).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    assert_eq!(page["currency"], "EUR");
    assert_eq!(page["prices"][0]["text"], "€39,551");

    let response = app
        .clone()
        .oneshot(with_headers(
            "/api/v1/currency",
            &[("x-visitor-id", "visitor-1"), ("accept-language", "en-GB")],
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["currency"], "EUR");
    assert_eq!(body["source"], "STORED");

    let response = app
        .oneshot(with_headers(
            "/api/v1/currency",
            &[("x-visitor-id", "visitor-2")],
        ))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["currency"], "USD");

    let raw = std::fs::read_to_string(tmp.path().join("store.json")).unwrap();
    assert!(raw.contains("preferred_currency:visitor-1"));
}

#[tokio::test]
async fn unknown_currency_falls_back_to_usd() {
    let (app, _tmp, _config) = test_app().await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/v1/currency",
            json!({ "currency": "XYZ" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["currency"], "USD");
}

#[tokio::test]
async fn prices_accept_currency_override() {
    let (app, _tmp, _config) = test_app().await;

    let response = app
        .oneshot(get("/api/v1/prices?currency=jpy"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["currency"], "JPY");
    assert_eq!(body["prices"][0]["text"], "¥6,491,490");
    assert_eq!(body["prices"][0]["id"], "price-model-3");
}

#[tokio::test]
async fn invalid_visitor_id_is_rejected() {
    let (app, _tmp, _config) = test_app().await;

    let response = app
        .oneshot(with_headers(
            "/api/v1/page",
            &[("x-visitor-id", "not valid")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn corrupt_store_recovers_on_currency_change() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("store.json"), "{not json").unwrap();
    let config = test_config(&tmp);
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    for _ in 0..2 {
        let mut put = json_request("PUT", "/api/v1/currency", json!({ "currency": "EUR" }));
        put.headers_mut()
            .insert("x-visitor-id", "visitor-1".parse().unwrap());
        let response = app.clone().oneshot(put).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["currency"], "EUR");
    }

    let response = app
        .oneshot(with_headers(
            "/api/v1/currency",
            &[("x-visitor-id", "visitor-1")],
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["currency"], "EUR");
    assert_eq!(body["source"], "STORED");

    let raw = std::fs::read_to_string(tmp.path().join("store.json")).unwrap();
    let repaired: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        repaired["entries"]["preferred_currency:visitor-1"]["value"],
        "EUR"
    );
}
