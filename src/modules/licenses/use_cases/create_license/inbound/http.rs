use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::licenses::adapters::inbound::http_errors::{bad_request, error_response};
use crate::modules::licenses::use_cases::create_license::command::CreateLicense;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLicenseBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub activation_email: Option<String>,
    pub activation_password: Option<String>,
    pub default_password: Option<String>,
    pub max_users: Option<u32>,
}

impl From<CreateLicenseBody> for CreateLicense {
    fn from(body: CreateLicenseBody) -> Self {
        CreateLicense {
            name: body.name,
            email: body.email,
            activation_email: body.activation_email,
            activation_password: body.activation_password,
            default_password: body.default_password,
            max_users: body.max_users,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateLicenseBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match state.licenses.create(body.into()).await {
        Ok(license) => (StatusCode::CREATED, Json(license)).into_response(),
        Err(e) => error_response(e),
    }
}
