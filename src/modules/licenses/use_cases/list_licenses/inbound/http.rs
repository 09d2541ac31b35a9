use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::modules::licenses::adapters::inbound::http_errors::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.licenses.list().await {
        Ok(licenses) => Json(licenses).into_response(),
        Err(e) => error_response(e),
    }
}
