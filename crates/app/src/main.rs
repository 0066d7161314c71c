use dioxus::prelude::*;

mod routes;
pub mod submission;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Used when neither `CULTIVAR_API_BASE` nor a page origin is available
/// (desktop, mobile, server-side rendering).
const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Base URL of the prediction service.
///
/// `CULTIVAR_API_BASE` set at build time wins. Otherwise the browser page's own
/// origin is used, so `/predict` is same-origin with the page.
pub fn api_base() -> String {
    resolve_api_base(option_env!("CULTIVAR_API_BASE"), page_origin())
}

fn resolve_api_base(override_base: Option<&str>, origin: Option<String>) -> String {
    match override_base {
        Some(base) if !base.is_empty() => base.to_string(),
        // Opaque origins (`file://`, sandboxed frames) serialize as "null".
        _ => origin
            .filter(|origin| !origin.is_empty() && origin != "null")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();

        if config.features.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let models = server::state::ModelStore::new(server::config::model_path());
        let state = server::state::AppState::new(models);
        if state.models.get_or_load().await.is_none() {
            tracing::warn!(
                path = %state.models.path().display(),
                "Model not found; run `train-model` first. Predictions will fail until it exists"
            );
        }

        let mut router = dioxus::server::router(App).merge(server::openapi::api_router(state));

        if config.features.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::extract::DefaultBodyLimit::max(
                server::config::max_body_bytes(),
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Wine Cultivar Prediction" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
