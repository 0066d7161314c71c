pub mod predict;

use axum::{routing::post, Router};
use crate::state::AppState;

/// Build the prediction REST router.
pub fn api_router() -> Router<AppState> {
    Router::new().route("/predict", post(predict::predict))
}
