use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::modules::licenses::adapters::inbound::http_errors::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.licenses.stats().await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => error_response(e),
    }
}
