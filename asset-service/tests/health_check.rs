mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn root_returns_liveness_message() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Assets API running");

    app.cleanup().await;
}

#[tokio::test]
async fn diagnostics_reports_store_connectivity() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/test", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    for key in [
        "backend",
        "database",
        "database_url",
        "database_name",
        "connection_status",
        "collections",
    ] {
        assert!(body.get(key).is_some(), "missing diagnostic key: {}", key);
    }
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_name"], app.db_name);

    let collections = body["collections"].as_array().expect("collections array");
    assert!(collections.len() <= 10);

    app.cleanup().await;
}
