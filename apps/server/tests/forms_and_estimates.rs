mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, json_request, test_app};

#[tokio::test]
async fn finance_estimate_accepts_string_inputs() {
    let (app, _tmp, _config) = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/estimates/finance",
            json!({
                "price": "40000",
                "downPayment": "5000",
                "tradeIn": "",
                "termMonths": "72",
                "apr": "4.5"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["monthlyPayment"], "$556");
    assert_eq!(body["principal"], "$35,000");
    assert_eq!(body["usd"]["principal"], 35000.0);
}

#[tokio::test]
async fn lease_estimate_in_visitor_currency() {
    let (app, _tmp, _config) = test_app().await;

    let mut request = json_request(
        "POST",
        "/api/v1/estimates/lease",
        json!({
            "msrp": 40000,
            "residualPercent": 58,
            "moneyFactor": 0.0025,
            "termMonths": 36,
            "driveOff": 0
        }),
    );
    request
        .headers_mut()
        .insert("accept-language", "en-US".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["monthlyPayment"], "$625");
    assert_eq!(body["residualValue"], "$23,200");
    assert_eq!(body["equivalentApr"], "6.00%");
}

#[tokio::test]
async fn contact_form_validation() {
    let (app, _tmp, _config) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/forms/contact",
            json!({ "name": "Ada", "email": "ada@example.com", "message": "Please call me." }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["reset"], true);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/forms/contact",
            json!({ "name": "Ada", "email": "ada@example.com", "message": "short" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["reset"], false);
    assert_eq!(
        body["message"],
        "Your message must be at least 10 characters."
    );
}

#[tokio::test]
async fn newsletter_rejects_bad_email() {
    let (app, _tmp, _config) = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/forms/newsletter",
            json!({ "email": "not-an-email" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["ok"], false);
}

#[tokio::test]
async fn trip_planner_counts_stops() {
    let (app, _tmp, _config) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/forms/trip-planner",
            json!({
                "origin": "Lagos",
                "destination": "Abuja",
                "vehicle": "Model Y",
                "rangeKm": "330"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["plan"]["distanceKm"], 500.0);
    assert_eq!(body["plan"]["stops"], 1);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/forms/trip-planner",
            json!({ "origin": "Lagos", "destination": "Abuja", "vehicle": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Please choose a vehicle.");
    assert!(body.get("plan").is_none());
}

#[tokio::test]
async fn mistyped_form_fields_get_form_status() {
    let (app, _tmp, _config) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/forms/contact",
            json!({ "name": 5, "email": "ada@example.com", "message": "Please call me." }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["reset"], false);
    assert!(body["message"].as_str().is_some());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/forms/trip-planner",
            json!("Lagos to Abuja"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert!(body.get("plan").is_none());
}

#[tokio::test]
async fn unreadable_estimate_body_gets_error_body() {
    let (app, _tmp, _config) = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/estimates/finance",
            json!("40000 over 72 months"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], 422);
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn huge_estimate_inputs_stay_finite() {
    let (app, _tmp, _config) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/estimates/lease",
            json!({
                "msrp": "1e308",
                "residualPercent": "100",
                "moneyFactor": "0",
                "termMonths": "36"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    for field in ["residualValue", "depreciation", "rentCharge", "monthlyPayment", "dueAtSigning"] {
        let value = body["usd"][field].as_f64();
        assert!(
            matches!(value, Some(v) if v.is_finite() && v >= 0.0),
            "{field} = {}",
            body["usd"][field]
        );
    }

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/estimates/finance",
            json!({ "price": "1.7e308", "termMonths": "72", "apr": "4.5" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    for field in ["principal", "monthlyPayment", "totalCost", "totalInterest"] {
        let value = body["usd"][field].as_f64();
        assert!(
            matches!(value, Some(v) if v.is_finite() && v >= 0.0),
            "{field} = {}",
            body["usd"][field]
        );
    }
    assert_ne!(body["totalCost"], "$0");
}
