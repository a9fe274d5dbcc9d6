use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use margindesk_core::market_data::PricePoint;

/// Fetch the current quote for a symbol from the feed, store it, and
/// return the stored observation.
async fn ingest_symbol(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PricePoint>> {
    let point = state.market_data_service.ingest_latest(&symbol).await?;
    Ok(Json(point))
}

/// Full stored price history, most recent first.
async fn get_price_history(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<PricePoint>>> {
    let history = state.market_data_service.history()?;
    Ok(Json(history))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks", get(get_price_history))
        .route("/stocks/{symbol}", get(ingest_symbol))
}
