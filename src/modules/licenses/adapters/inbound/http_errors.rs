// Maps repository failures onto HTTP responses with an `{"error": ...}` body.
//
// A full license answers 404 like a missing one; clients of the registry depend on that status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::modules::licenses::core::errors::LicenseError;
use crate::modules::licenses::repository::RepositoryError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(err: RepositoryError) -> Response {
    let status = match &err {
        RepositoryError::NotFound(_) => StatusCode::NOT_FOUND,
        RepositoryError::Rejected(LicenseError::CapacityExceeded { .. }) => StatusCode::NOT_FOUND,
        RepositoryError::Rejected(_) => StatusCode::BAD_REQUEST,
        RepositoryError::Storage(e) => {
            error!(error = %e, "license storage failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

pub fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}
