use axum::extract::State;
use axum::Json;
use shared_types::HealthResponse;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use crate::state::ModelStore;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check handler. Reports the model as loaded only once a
/// prediction (or startup warm-up) has brought it into memory.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(models): State<Arc<ModelStore>>) -> Json<HealthResponse> {
    let model = if models.is_loaded().await {
        "loaded"
    } else {
        "missing"
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        model: model.to_string(),
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
