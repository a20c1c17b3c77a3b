use diwan_telemetry::tracing::init_test_tracing;

use crate::support::test_app::{spawn_test_app, unreachable_database};

mod support;

#[tokio::test(flavor = "multi_thread")]
async fn health_check_works_without_a_database() {
    init_test_tracing();

    let app = spawn_test_app(unreachable_database()).await;

    let response = app.health_check().await;

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}
