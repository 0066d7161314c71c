use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use server::training::{fit, parse_dataset};
use std::path::PathBuf;

use crate::common;

/// Two rows per class; class `n` sits around `n * 10` on every feature.
fn dataset() -> String {
    let mut data = String::new();
    for class_id in 1..=3u32 {
        for offset in [-0.5, 0.5] {
            let value = f64::from(class_id) * 10.0 + offset;
            let features = vec![value.to_string(); 13].join(",");
            data.push_str(&format!("{class_id},{features}\n"));
        }
    }
    data
}

fn temp_model_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cultivar-{name}-{}.json", std::process::id()))
}

#[tokio::test]
async fn trained_model_file_serves_predictions() {
    let path = temp_model_path("pipeline");
    let model = fit(&parse_dataset(&dataset())).unwrap();
    model.save(&path).unwrap();

    let app = common::app_with_model_path(&path);
    let body = Value::Object(common::form_body("30.2")).to_string();
    let (status, response) = common::post_json(&app, "/predict", &body).await;

    let _ = std::fs::remove_file(&path);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["prediction"], "Cultivar 3 (e.g. Barbera)");
}

#[tokio::test]
async fn model_trained_after_startup_is_picked_up() {
    let path = temp_model_path("late");
    let _ = std::fs::remove_file(&path);
    let app = common::app_with_model_path(&path);
    let body = Value::Object(common::form_body("10")).to_string();

    let (before, _) = common::post_json(&app, "/predict", &body).await;
    let (health_before, _) = common::get(&app, "/health").await;

    fit(&parse_dataset(&dataset())).unwrap().save(&path).unwrap();
    let (after, response) = common::post_json(&app, "/predict", &body).await;
    let (_, health_after) = common::get(&app, "/health").await;

    let _ = std::fs::remove_file(&path);
    assert_eq!(before, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(health_before, StatusCode::OK);
    assert_eq!(after, StatusCode::OK);
    assert_eq!(response["prediction"], "Cultivar 1 (e.g. Barolo)");
    assert_eq!(health_after["model"], "loaded");
}

#[tokio::test]
async fn corrupt_model_file_is_treated_as_missing() {
    let path = temp_model_path("corrupt");
    std::fs::write(&path, "{ not a model").unwrap();

    let app = common::app_with_model_path(&path);
    let body = Value::Object(common::form_body("10")).to_string();
    let (status, response) = common::post_json(&app, "/predict", &body).await;

    let _ = std::fs::remove_file(&path);
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["kind"], "ModelUnavailable");
}
