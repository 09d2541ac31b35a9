use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::licenses::adapters::inbound::http_errors::error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteLicenseResponse {
    pub message: &'static str,
}

pub async fn handle(State(state): State<AppState>, Path(license_id): Path<String>) -> Response {
    match state.licenses.delete(&license_id).await {
        Ok(_) => Json(DeleteLicenseResponse {
            message: "license deleted",
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}
