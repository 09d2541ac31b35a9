// End to end lifecycle of one license through the public router.
//
// Create, fill to capacity, overflow, free a seat, delete, and confirm the license is gone.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::licenses::adapters::outbound::json_file_store::JsonFileLicenseStore;
use crate::modules::licenses::repository::LicenseRepository;
use crate::shared::core::ids::MillisIdGenerator;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::http::read_json;
use crate::tests::fixtures::state::make_test_state;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn run_lifecycle(app: &Router) {
    let (status, license) = send(
        app,
        json_request(
            "POST",
            "/licenses",
            r#"{"name":"A","email":"a@x.com","activationEmail":"a@x.com","activationPassword":"p","maxUsers":2}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(license["users"], serde_json::json!([]));
    let license_id = license["id"].as_str().unwrap().to_string();
    let users_uri = format!("/licenses/{license_id}/users");

    let (status, after_first) = send(
        app,
        json_request("POST", &users_uri, r#"{"name":"U1","email":"u1@x.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after_first["users"].as_array().map(Vec::len), Some(1));
    let first_user_id = after_first["users"][0]["id"].as_str().unwrap().to_string();

    let (status, after_second) = send(
        app,
        json_request("POST", &users_uri, r#"{"name":"U2","email":"u2@x.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after_second["users"].as_array().map(Vec::len), Some(2));

    let (status, _) = send(
        app,
        json_request("POST", &users_uri, r#"{"name":"U3","email":"u3@x.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, after_removal) = send(
        app,
        empty_request("DELETE", &format!("{users_uri}/{first_user_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let remaining = after_removal["users"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|u| u["id"] != first_user_id.as_str()));

    let (status, stats) = send(app, empty_request("GET", "/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalUsers"], 1);
    assert_eq!(stats["usagePercentage"], 50);

    let license_uri = format!("/licenses/{license_id}");
    let (status, _) = send(app, empty_request("DELETE", &license_uri)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(app, empty_request("GET", &license_uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_walk_a_license_through_its_lifecycle_in_memory() {
    let app = router(make_test_state());
    run_lifecycle(&app).await;
}

#[tokio::test]
async fn it_should_walk_a_license_through_its_lifecycle_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("licenses.json");
    let state = AppState {
        licenses: Arc::new(LicenseRepository::new(
            Arc::new(JsonFileLicenseStore::new(path.clone())),
            Arc::new(MillisIdGenerator::new()),
        )),
    };
    let app = router(state);
    run_lifecycle(&app).await;

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, serde_json::json!([]));
}

#[tokio::test]
async fn it_should_persist_between_repository_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("licenses.json");
    let open = || {
        router(AppState {
            licenses: Arc::new(LicenseRepository::new(
                Arc::new(JsonFileLicenseStore::new(path.clone())),
                Arc::new(MillisIdGenerator::new()),
            )),
        })
    };

    let (status, license) = send(
        &open(),
        json_request(
            "POST",
            "/licenses",
            r#"{"name":"A","email":"a@x.com","activationEmail":"a@x.com","activationPassword":"p"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/licenses/{}", license["id"].as_str().unwrap());
    let (status, reloaded) = send(&open(), empty_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reloaded, license);
}
