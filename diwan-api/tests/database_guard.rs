use diwan_telemetry::tracing::init_test_tracing;
use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::support::test_app::{spawn_test_app, unconfigured_database, unreachable_database};

mod support;

fn normalized_body() -> Value {
    json!({ "success": false, "error": "Database unavailable", "status": 503 })
}

#[tokio::test(flavor = "multi_thread")]
async fn requests_fail_closed_when_the_database_url_is_missing() {
    init_test_tracing();

    let app = spawn_test_app(unconfigured_database()).await;

    let response = app.read_all_poems().await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json().await.expect("body was not json");
    assert_eq!(body, normalized_body());
}

#[tokio::test(flavor = "multi_thread")]
async fn requests_fail_closed_when_the_database_is_unreachable() {
    init_test_tracing();

    let app = spawn_test_app(unreachable_database()).await;

    let response = app.read_all_poems().await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json().await.expect("body was not json");
    assert_eq!(body, normalized_body());
}

#[tokio::test(flavor = "multi_thread")]
async fn single_poem_requests_share_the_unavailability_contract() {
    init_test_tracing();

    let app = spawn_test_app(unreachable_database()).await;

    let response = app.read_poem("qasida-of-the-nile").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json().await.expect("body was not json");
    assert_eq!(body, normalized_body());
}

#[tokio::test(flavor = "multi_thread")]
async fn category_requests_share_the_unavailability_contract() {
    init_test_tracing();

    let app = spawn_test_app(unreachable_database()).await;

    let response = app.read_all_categories().await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json().await.expect("body was not json");
    assert_eq!(body, normalized_body());
}
