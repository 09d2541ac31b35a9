use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::licenses::adapters::inbound::http_errors::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(license_id): Path<String>) -> Response {
    match state.licenses.get(&license_id).await {
        Ok(license) => Json(license).into_response(),
        Err(e) => error_response(e),
    }
}
