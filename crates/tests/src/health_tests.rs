use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn health_reports_loaded_model() {
    let app = common::test_app();

    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "loaded");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn health_reports_missing_model() {
    let app = common::app_without_model();

    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "missing");
}

#[tokio::test]
async fn docs_are_off_without_config() {
    let app = common::test_app();

    let (status, _) = common::get(&app, "/docs").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
