use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use showroom_core::fx::RatesSnapshot;

use crate::main_lib::AppState;

/// The rate table currently used for rendering, with its provenance.
async fn get_rates(State(state): State<Arc<AppState>>) -> Json<RatesSnapshot> {
    let snapshot = state.fx_service.snapshot();
    Json(RatesSnapshot::clone(&snapshot))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/rates", get(get_rates))
}
