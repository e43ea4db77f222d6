//! Health endpoint integration test.
//!
//! Requires a running Postgres; point TEST_DATABASE_URL at it.

mod common;

use common::TestApp;

#[tokio::test]
#[ignore] // Requires database - set TEST_DATABASE_URL
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "content-service");

    app.cleanup().await;
}
