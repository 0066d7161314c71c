use axum::extract::FromRef;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::{ModelError, NaiveBayesModel};

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<Arc<ModelStore>>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub models: Arc<ModelStore>,
}

impl AppState {
    pub fn new(models: ModelStore) -> Self {
        Self {
            models: Arc::new(models),
        }
    }
}

/// Lazily loaded model.
///
/// Nothing is read until the first prediction. While the file is missing or
/// invalid every call retries the load, so a model trained after startup is
/// picked up without a restart.
pub struct ModelStore {
    path: PathBuf,
    model: RwLock<Option<Arc<NaiveBayesModel>>>,
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            model: RwLock::new(None),
        }
    }

    /// A store that already holds `model`.
    pub fn preloaded(model: NaiveBayesModel) -> Self {
        Self {
            path: PathBuf::new(),
            model: RwLock::new(Some(Arc::new(model))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn is_loaded(&self) -> bool {
        self.model.read().await.is_some()
    }

    /// Return the model, loading it from disk if this is the first use.
    pub async fn get_or_load(&self) -> Option<Arc<NaiveBayesModel>> {
        if let Some(model) = self.model.read().await.as_ref() {
            return Some(model.clone());
        }

        let mut slot = self.model.write().await;
        if let Some(model) = slot.as_ref() {
            return Some(model.clone());
        }

        match self.read_model().await {
            Ok(model) => {
                tracing::info!(path = %self.path.display(), classes = model.class_ids().count(), "Model loaded");
                let model = Arc::new(model);
                *slot = Some(model.clone());
                Some(model)
            }
            Err(e) => {
                tracing::error!(error = %e, "Model not available");
                None
            }
        }
    }

    async fn read_model(&self) -> Result<NaiveBayesModel, ModelError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ModelError::Io {
                path: self.path.clone(),
                source,
            })?;
        NaiveBayesModel::from_json(&json)
    }
}
