use serde::{Deserialize, Serialize};
use shared_types::cultivar_name;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Per-class, per-feature parameters of the Gaussian likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureStats {
    pub mean: f64,
    pub stdev: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Class {class_id} feature {feature} has non-positive stdev {stdev}")]
    InvalidStats {
        class_id: u32,
        feature: usize,
        stdev: f64,
    },
    #[error("Model has no classes")]
    Empty,
}

/// Gaussian Naive Bayes classifier.
///
/// Serialized as `{ "<class id>": { "<feature index>": {mean, stdev} } }`;
/// JSON object keys are the decimal ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NaiveBayesModel {
    classes: BTreeMap<u32, BTreeMap<usize, FeatureStats>>,
}

/// Outcome of classifying one feature vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub class_id: u32,
    /// Share of the total likelihood held by the winning class, in percent.
    pub confidence: f64,
}

impl Prediction {
    pub fn label(&self) -> String {
        cultivar_name(self.class_id)
    }

    /// Confidence with two decimals and a percent sign, e.g. `87.34%`.
    pub fn confidence_text(&self) -> String {
        format!("{:.2}%", self.confidence)
    }
}

/// Gaussian probability density of `x`.
pub fn gaussian_pdf(x: f64, mean: f64, stdev: f64) -> f64 {
    let exponent = (-((x - mean).powi(2) / (2.0 * stdev.powi(2)))).exp();
    (1.0 / ((2.0 * std::f64::consts::PI).sqrt() * stdev)) * exponent
}

impl NaiveBayesModel {
    pub fn new(classes: BTreeMap<u32, BTreeMap<usize, FeatureStats>>) -> Result<Self, ModelError> {
        let model = Self { classes };
        model.validate()?;
        Ok(model)
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let classes = serde_json::from_str(json)?;
        Self::new(classes)
    }

    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_pretty()?).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn class_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.classes.keys().copied()
    }

    #[cfg(test)]
    pub(crate) fn stats(&self, class_id: u32, feature: usize) -> Option<FeatureStats> {
        self.classes.get(&class_id)?.get(&feature).copied()
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.classes.is_empty() {
            return Err(ModelError::Empty);
        }
        for (&class_id, features) in &self.classes {
            for (&feature, stats) in features {
                if !(stats.stdev > 0.0 && stats.stdev.is_finite()) {
                    return Err(ModelError::InvalidStats {
                        class_id,
                        feature,
                        stdev: stats.stdev,
                    });
                }
            }
        }
        Ok(())
    }

    /// Classify a feature vector given in dataset column order.
    ///
    /// Features without stats for a class do not contribute to that class's
    /// likelihood. Ties go to the lowest class id.
    pub fn predict(&self, features: &[f64]) -> Prediction {
        let likelihoods: Vec<(u32, f64)> = self
            .classes
            .iter()
            .map(|(&class_id, stats)| {
                let likelihood = features
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &x)| stats.get(&i).map(|s| gaussian_pdf(x, s.mean, s.stdev)))
                    .product::<f64>();
                (class_id, likelihood)
            })
            .collect();

        // Non-empty: checked by validate.
        let mut best = likelihoods[0];
        for &(class_id, likelihood) in &likelihoods[1..] {
            if likelihood > best.1 {
                best = (class_id, likelihood);
            }
        }

        let total: f64 = likelihoods.iter().map(|(_, l)| l).sum();
        let confidence = if total > 0.0 {
            best.1 / total * 100.0
        } else {
            0.0
        };

        Prediction {
            class_id: best.0,
            confidence,
        }
    }
}
