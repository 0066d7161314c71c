use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{Map, Value};
use std::sync::Arc;

use shared_types::{AppError, Confidence, FormInput, PredictionResponse, WINE_FEATURES};
use crate::state::ModelStore;

pub const MODEL_NOT_LOADED: &str = "Model not loaded. Please contact administrator.";

/// Why a request body could not be turned into a feature vector.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FeatureError {
    #[error("missing field: {0}")]
    Missing(&'static str),
    #[error("invalid value for {field}: {value}")]
    Invalid { field: &'static str, value: String },
}

/// Read the 13 wine features, in model column order, from a JSON object.
///
/// Values may be JSON numbers or numeric strings (form fields arrive as
/// strings). Extra keys are ignored.
pub fn feature_vector(body: &Map<String, Value>) -> Result<Vec<f64>, FeatureError> {
    WINE_FEATURES
        .iter()
        .map(|feature| match body.get(feature.name) {
            None | Some(Value::Null) => Err(FeatureError::Missing(feature.name)),
            Some(Value::Number(n)) => n.as_f64().ok_or_else(|| FeatureError::Invalid {
                field: feature.name,
                value: n.to_string(),
            }),
            Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| FeatureError::Invalid {
                field: feature.name,
                value: format!("{s:?}"),
            }),
            Some(other) => Err(FeatureError::Invalid {
                field: feature.name,
                value: other.to_string(),
            }),
        })
        .collect()
}

fn prediction_failed(reason: impl std::fmt::Display) -> AppError {
    AppError::bad_request(format!("Prediction failed: {reason}"))
}

// ---------------------------------------------------------------------------
// POST /predict
// ---------------------------------------------------------------------------

/// Classify a wine sample into its cultivar.
#[utoipa::path(
    post,
    path = "/predict",
    request_body = FormInput,
    responses(
        (status = 200, description = "Predicted cultivar", body = PredictionResponse),
        (status = 400, description = "Unreadable or incomplete input", body = AppError),
        (status = 500, description = "Model not loaded", body = AppError)
    ),
    tag = "prediction"
)]
pub async fn predict(
    State(models): State<Arc<ModelStore>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<PredictionResponse>, AppError> {
    let model = models
        .get_or_load()
        .await
        .ok_or_else(|| AppError::model_unavailable(MODEL_NOT_LOADED))?;

    let Json(body) = payload.map_err(|e| prediction_failed(e.body_text()))?;
    let features = feature_vector(&body).map_err(prediction_failed)?;

    let prediction = model.predict(&features);
    tracing::info!(
        class_id = prediction.class_id,
        confidence = prediction.confidence,
        "Prediction served"
    );

    Ok(Json(PredictionResponse {
        prediction: prediction.label(),
        confidence: Confidence::Text(prediction.confidence_text()),
    }))
}
