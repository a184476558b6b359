use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use showroom_core::calculators::{FinanceForm, FinanceView, LeaseForm, LeaseView};

use crate::{api::visitor::visitor_from_headers, error::ApiResult, main_lib::AppState};

async fn finance_estimate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<FinanceForm>, JsonRejection>,
) -> ApiResult<Json<FinanceView>> {
    let visitor = visitor_from_headers(&headers)?;
    let Json(form) = payload?;
    Ok(Json(state.site.finance_estimate(&visitor, &form).await))
}

async fn lease_estimate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<LeaseForm>, JsonRejection>,
) -> ApiResult<Json<LeaseView>> {
    let visitor = visitor_from_headers(&headers)?;
    let Json(form) = payload?;
    Ok(Json(state.site.lease_estimate(&visitor, &form).await))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/estimates/finance", post(finance_estimate))
        .route("/estimates/lease", post(lease_estimate))
}
