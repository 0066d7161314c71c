use shared_types::{AppConfig, FeatureFlags};
use std::path::PathBuf;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse a config file body, falling back to defaults when it is invalid.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse {CONFIG_PATH}; using defaults");
        AppConfig::default()
    })
}

/// Read `config.toml` and store it in the global `OnceLock`. Only the first
/// call has effect. A missing or unparseable file yields the defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => {
                let config = parse_config(&contents);
                tracing::info!(features = ?config.features, model = %config.model.path, "Loaded {CONFIG_PATH}");
                config
            }
            Err(e) => {
                tracing::info!(error = %e, "{CONFIG_PATH} not found; using defaults");
                AppConfig::default()
            }
        }
    })
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_config()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        telemetry: false,
        docs: false,
    };
    CONFIG.get().map(|c| &c.features).unwrap_or(&DEFAULT)
}

/// Model file location: `MODEL_PATH` if set, else `[model].path`.
pub fn model_path() -> PathBuf {
    resolve_model_path(std::env::var("MODEL_PATH").ok(), load_config())
}

fn resolve_model_path(env_override: Option<String>, config: &AppConfig) -> PathBuf {
    match env_override {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(&config.model.path),
    }
}

/// Maximum accepted request body (`MAX_BODY_BYTES`, default 64 KiB).
pub fn max_body_bytes() -> usize {
    std::env::var("MAX_BODY_BYTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(64 * 1024)
}
