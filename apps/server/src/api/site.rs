use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use showroom_core::PageView;
use showroom_market_data::ResolvedCurrency;

use crate::{
    api::visitor::visitor_from_headers,
    error::ApiResult,
    main_lib::AppState,
    models::{CurrencyUpdate, PricesQuery, PricesResponse},
};

async fn get_currency(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<ResolvedCurrency>> {
    let visitor = visitor_from_headers(&headers)?;
    Ok(Json(state.site.resolve_currency(&visitor).await))
}

async fn set_currency(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<CurrencyUpdate>, JsonRejection>,
) -> ApiResult<Json<PageView>> {
    let visitor = visitor_from_headers(&headers)?;
    let Json(update) = payload?;
    Ok(Json(state.site.set_currency(&visitor, &update.currency)))
}

async fn get_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<PageView>> {
    let visitor = visitor_from_headers(&headers)?;
    Ok(Json(state.site.page(&visitor).await))
}

async fn get_prices(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<PricesQuery>,
) -> ApiResult<Json<PricesResponse>> {
    let visitor = visitor_from_headers(&headers)?;
    let (currency, prices) = state
        .site
        .prices(&visitor, query.currency.as_deref())
        .await;
    Ok(Json(PricesResponse { currency, prices }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/currency", get(get_currency).put(set_currency))
        .route("/page", get(get_page))
        .route("/prices", get(get_prices))
}
