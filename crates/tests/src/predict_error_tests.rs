use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common;

#[tokio::test]
async fn missing_field_is_bad_request() {
    let app = common::test_app();
    let mut body = common::form_body("12");
    body.remove("proline");

    let (status, response) =
        common::post_json(&app, "/predict", &Value::Object(body).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Prediction failed: missing field: proline");
    assert_eq!(response["kind"], "BadRequest");
}

#[tokio::test]
async fn non_numeric_field_is_bad_request() {
    let app = common::test_app();
    let mut body = common::form_body("12");
    body.insert("hue".into(), json!("pale"));

    let (status, response) =
        common::post_json(&app, "/predict", &Value::Object(body).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = response["error"].as_str().unwrap();
    assert!(message.starts_with("Prediction failed: invalid value for hue"), "{message}");
}

#[tokio::test]
async fn empty_string_field_is_bad_request() {
    let app = common::test_app();
    let mut body = common::form_body("12");
    body.insert("ash".into(), json!(""));

    let (status, _) = common::post_json(&app, "/predict", &Value::Object(body).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = common::test_app();

    let (status, response) = common::post_json(&app, "/predict", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = response["error"].as_str().unwrap();
    assert!(message.starts_with("Prediction failed:"), "{message}");
}

#[tokio::test]
async fn non_object_json_is_bad_request() {
    let app = common::test_app();

    let (status, response) = common::post_json(&app, "/predict", "[1, 2, 3]").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "BadRequest");
}

#[tokio::test]
async fn missing_content_type_is_bad_request() {
    let app = common::test_app();
    let body = Value::Object(common::form_body("12")).to_string();
    let req = Request::builder()
        .method("POST")
        .uri("/predict")
        .body(Body::from(body))
        .unwrap();

    let (status, response) = common::send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "BadRequest");
}

#[tokio::test]
async fn missing_model_is_server_error() {
    let app = common::app_without_model();
    let body = Value::Object(common::form_body("12")).to_string();

    let (status, response) = common::post_json(&app, "/predict", &body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response["error"],
        "Model not loaded. Please contact administrator."
    );
    assert_eq!(response["kind"], "ModelUnavailable");
}

#[tokio::test]
async fn missing_model_wins_over_bad_input() {
    let app = common::app_without_model();

    let (status, response) = common::post_json(&app, "/predict", "{not json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["kind"], "ModelUnavailable");
}

#[tokio::test]
async fn get_predict_is_not_allowed() {
    let app = common::test_app();

    let (status, _) = common::get(&app, "/predict").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
