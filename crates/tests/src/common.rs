use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{Map, Value};
use server::model::{FeatureStats, NaiveBayesModel};
use server::state::{AppState, ModelStore};
use shared_types::WINE_FEATURES;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tower::ServiceExt;

/// Three-class model over all 13 features. Class `n` has mean `n * 10` and
/// stdev 1 everywhere, so a sample of all `20.0` is clearly class 2.
pub fn test_model() -> NaiveBayesModel {
    let classes = (1..=3u32)
        .map(|class_id| {
            let stats = (0..WINE_FEATURES.len())
                .map(|feature| {
                    (
                        feature,
                        FeatureStats {
                            mean: f64::from(class_id) * 10.0,
                            stdev: 1.0,
                        },
                    )
                })
                .collect::<BTreeMap<_, _>>();
            (class_id, stats)
        })
        .collect();
    NaiveBayesModel::new(classes).expect("test model is valid")
}

/// Router backed by the in-memory test model.
pub fn test_app() -> Router {
    server::openapi::api_router(AppState::new(ModelStore::preloaded(test_model())))
}

/// Router whose model file does not exist.
pub fn app_without_model() -> Router {
    app_with_model_path(missing_model_path())
}

/// Router that lazily loads the model from `path`.
pub fn app_with_model_path(path: impl Into<PathBuf>) -> Router {
    server::openapi::api_router(AppState::new(ModelStore::new(path)))
}

pub fn missing_model_path() -> PathBuf {
    std::env::temp_dir().join(format!("cultivar-missing-{}.json", std::process::id()))
}

/// A request body with every feature set to `value`, as form strings.
pub fn form_body(value: &str) -> Map<String, Value> {
    WINE_FEATURES
        .iter()
        .map(|f| (f.name.to_string(), Value::String(value.to_string())))
        .collect()
}

/// POST JSON to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Send a request and return status plus JSON body (`Null` when the body is
/// not JSON).
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
