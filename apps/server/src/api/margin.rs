use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use margindesk_core::margin::MarginDecision;

/// Evaluate margin sufficiency for a client and persist the updated margin
/// record.
async fn evaluate_margin(
    Path(client_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MarginDecision>> {
    let decision = state.margin_service.evaluate_margin(client_id).await?;
    Ok(Json(decision))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/margin/{client_id}", get(evaluate_margin))
}
