use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::modules::licenses::adapters::inbound::http_errors::{bad_request, error_response};
use crate::modules::licenses::use_cases::update_license::command::UpdateLicense;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLicenseBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub activation_email: Option<String>,
    pub activation_password: Option<String>,
    pub default_password: Option<String>,
    pub max_users: Option<u32>,
    /// Keys the registry does not own, such as `users`.
    #[serde(flatten)]
    pub unrecognised: Map<String, Value>,
}

impl From<UpdateLicenseBody> for UpdateLicense {
    fn from(body: UpdateLicenseBody) -> Self {
        UpdateLicense {
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
    Path(license_id): Path<String>,
    body: Result<Json<UpdateLicenseBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let has_unrecognised = !body.unrecognised.is_empty();
    let command = UpdateLicense::from(body);
    let result = if command.is_empty() && has_unrecognised {
        state.licenses.get(&license_id).await
    } else {
        state.licenses.update(&license_id, command).await
    };

    match result {
        Ok(license) => Json(license).into_response(),
        Err(e) => error_response(e),
    }
}
