use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common;

#[tokio::test]
async fn predict_returns_cultivar_and_confidence() {
    let app = common::test_app();
    let body = Value::Object(common::form_body("20.0")).to_string();

    let (status, response) = common::post_json(&app, "/predict", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["prediction"], "Cultivar 2 (e.g. Grignolino)");
    assert_eq!(response["confidence"], "100.00%");
}

#[tokio::test]
async fn predict_accepts_json_numbers() {
    let app = common::test_app();
    let mut body = common::form_body("30");
    for value in body.values_mut() {
        *value = json!(30.0);
    }

    let (status, response) =
        common::post_json(&app, "/predict", &Value::Object(body).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["prediction"], "Cultivar 3 (e.g. Barbera)");
}

#[tokio::test]
async fn predict_tie_goes_to_lowest_class() {
    let app = common::test_app();
    // Equidistant from the class 1 and class 2 means.
    let body = Value::Object(common::form_body("15")).to_string();

    let (status, response) = common::post_json(&app, "/predict", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["prediction"], "Cultivar 1 (e.g. Barolo)");
    assert_eq!(response["confidence"], "50.00%");
}

#[tokio::test]
async fn predict_ignores_extra_fields() {
    let app = common::test_app();
    let mut body = common::form_body("10");
    body.insert("submit".into(), json!("PREDICT CULTIVAR"));

    let (status, response) =
        common::post_json(&app, "/predict", &Value::Object(body).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["prediction"], "Cultivar 1 (e.g. Barolo)");
}

#[tokio::test]
async fn predict_far_outlier_reports_zero_confidence() {
    let app = common::test_app();
    // Every likelihood underflows to zero.
    let body = Value::Object(common::form_body("100000")).to_string();

    let (status, response) = common::post_json(&app, "/predict", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["prediction"], "Cultivar 1 (e.g. Barolo)");
    assert_eq!(response["confidence"], "0.00%");
}

#[tokio::test]
async fn predict_is_repeatable() {
    let app = common::test_app();
    let body = Value::Object(common::form_body("21.5")).to_string();

    let (_, first) = common::post_json(&app, "/predict", &body).await;
    let (_, second) = common::post_json(&app, "/predict", &body).await;

    assert_eq!(first, second);
}
