use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::licenses::adapters::inbound::http_errors::{bad_request, error_response};
use crate::modules::licenses::use_cases::add_user::command::AddUser;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub default_password: Option<String>,
}

impl From<AddUserBody> for AddUser {
    fn from(body: AddUserBody) -> Self {
        AddUser {
            name: body.name,
            email: body.email,
            password: body.password,
            default_password: body.default_password,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(license_id): Path<String>,
    body: Result<Json<AddUserBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match state.licenses.add_user(&license_id, body.into()).await {
        Ok(license) => Json(license).into_response(),
        Err(e) => error_response(e),
    }
}
