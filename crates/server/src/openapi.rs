use axum::Router;
use shared_types::{AppError, AppErrorKind, Confidence, FormInput, HealthResponse, PredictionResponse};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{health, rest, state::AppState};

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::predict::predict,
        health::health_check,
    ),
    components(schemas(
        FormInput, PredictionResponse, Confidence, AppError, AppErrorKind, HealthResponse,
    )),
    tags(
        (name = "prediction", description = "Wine cultivar prediction"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Cultivar API",
        description = "Gaussian Naive Bayes wine cultivar prediction service",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router serving `/predict`, `/health`, and, when the `docs`
/// flag is on, the API reference at `/docs`.
pub fn api_router(state: AppState) -> Router {
    let flags = crate::config::feature_flags();

    let router = Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state);

    if flags.docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    }
}
