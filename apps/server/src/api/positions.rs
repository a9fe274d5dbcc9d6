use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::{error::ApiResult, main_lib::AppState};
use margindesk_core::positions::Position;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientPositions {
    client_id: i64,
    positions: Vec<Position>,
}

async fn get_client_positions(
    Path(client_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ClientPositions>> {
    let positions = state.position_service.get_client_positions(client_id)?;
    Ok(Json(ClientPositions {
        client_id,
        positions,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/positions/{client_id}", get(get_client_positions))
}
