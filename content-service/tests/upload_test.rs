//! Create operation integration tests.
//!
//! Requires a running Postgres; point TEST_DATABASE_URL at it.

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
#[ignore] // Requires database - set TEST_DATABASE_URL
async fn upload_content_works_and_trims_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .upload(&json!({ "title": "  Doc  ", "html": "\n<p>hi</p>  " }))
        .await;

    assert_eq!(StatusCode::CREATED, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Content uploaded successfully");
    assert_eq!(body["data"]["title"], "Doc");
    assert!(body["data"]["id"].is_i64());
    assert!(body["data"]["created_at"].is_string());

    // Stored row holds the trimmed values
    let id = body["data"]["id"].as_i64().unwrap();
    let (title, html): (String, String) =
        sqlx::query_as("SELECT title, html_content FROM content WHERE id = $1")
            .bind(id)
            .fetch_one(app.db.pool())
            .await
            .expect("Row not found");
    assert_eq!(title, "Doc");
    assert_eq!(html, "<p>hi</p>");

    app.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires database - set TEST_DATABASE_URL
async fn upload_rejects_missing_fields() {
    let app = TestApp::spawn().await;

    for body in [
        json!({ "title": "Doc" }),
        json!({ "html": "<p>hi</p>" }),
        json!({}),
    ] {
        let response = app.upload(&body).await;
        assert_eq!(StatusCode::BAD_REQUEST, response.status());

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body["error"], "Title and HTML content are required");
    }

    assert_eq!(0, app.row_count().await);

    app.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires database - set TEST_DATABASE_URL
async fn upload_rejects_whitespace_only_fields() {
    let app = TestApp::spawn().await;

    let response = app.upload(&json!({ "title": "   ", "html": "\n\t " })).await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    assert_eq!(0, app.row_count().await);

    app.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires database - set TEST_DATABASE_URL
async fn upload_rejects_malformed_json() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/api/upload", app.address))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].is_string());
    assert_eq!(0, app.row_count().await);

    app.cleanup().await;
}
