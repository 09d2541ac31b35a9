use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::licenses::use_cases::add_user::inbound::http as add_user_http;
use crate::modules::licenses::use_cases::create_license::inbound::http as create_http;
use crate::modules::licenses::use_cases::delete_license::inbound::http as delete_http;
use crate::modules::licenses::use_cases::get_license::inbound::http as get_http;
use crate::modules::licenses::use_cases::license_stats::inbound::http as stats_http;
use crate::modules::licenses::use_cases::list_licenses::inbound::http as list_http;
use crate::modules::licenses::use_cases::remove_user::inbound::http as remove_user_http;
use crate::modules::licenses::use_cases::update_license::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/licenses", get(list_http::handle).post(create_http::handle))
        .route(
            "/licenses/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route("/licenses/{id}/users", post(add_user_http::handle))
        .route(
            "/licenses/{id}/users/{user_id}",
            delete(remove_user_http::handle),
        )
        .route("/stats", get(stats_http::handle))
        .with_state(state)
}

/// The router mounted under `api_prefix`, with CORS open to any origin and request tracing.
pub fn app(state: AppState, api_prefix: &str) -> Router {
    let routes = if api_prefix.is_empty() {
        router(state)
    } else {
        Router::new().nest(api_prefix, router(state))
    };
    routes
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
