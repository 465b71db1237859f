use lyric_match_back::state::catalog::Song;
use serde_json::{Value, json};

use crate::helpers::{ScriptedGenerator, TestApp};

#[tokio::test]
async fn healthcheck_reports_ok_with_generator() {
    let app = TestApp::spawn(Song::new("Halo", "Beyoncé"), Some(ScriptedGenerator::new(Vec::new()))).await;

    let body: Value = reqwest::get(app.url("/healthcheck"))
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();

    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn healthcheck_reports_degraded_without_generator() {
    let app = TestApp::spawn(Song::new("Halo", "Beyoncé"), None).await;

    let body: Value = reqwest::get(app.url("/healthcheck"))
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();

    assert_eq!(body, json!({ "status": "degraded" }));
}

#[tokio::test]
async fn openapi_document_lists_round_routes() {
    let app = TestApp::spawn(Song::new("Halo", "Beyoncé"), None).await;

    let doc: Value = reqwest::get(app.url("/api-doc/openapi.json"))
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();

    for path in ["/lyrics", "/hint", "/check", "/healthcheck"] {
        assert!(doc["paths"].get(path).is_some(), "missing {path}");
    }
}
