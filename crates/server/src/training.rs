use crate::model::{FeatureStats, ModelError, NaiveBayesModel};
use std::collections::BTreeMap;

/// UCI archive copy of the Wine dataset (class id first, then 13 features).
pub const WINE_DATA_URL: &str =
    "https://archive.ics.uci.edu/ml/machine-learning-databases/wine/wine.data";

/// Replacement for a zero standard deviation so the likelihood stays finite.
pub const MIN_STDEV: f64 = 1e-6;

#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("Dataset contains no usable rows")]
    EmptyDataset,
    #[error("Class {class_id} has {rows} row(s); at least 2 are needed")]
    TooFewRows { class_id: u32, rows: usize },
    #[error("Row {line} has {found} features, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to download dataset: {0}")]
    Download(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A labelled sample: class id and its feature values.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub line: usize,
    pub class_id: u32,
    pub features: Vec<f64>,
}

/// Whole, non-negative class label that fits a `u32`.
fn class_id(value: f64) -> Option<u32> {
    let in_range = value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX);
    (in_range && value.fract() == 0.0).then_some(value as u32)
}

/// Parse comma-separated rows. Blank lines, lines with an unparsable or
/// non-finite value, lines whose class is not a whole non-negative number,
/// and lines without any feature column are skipped.
pub fn parse_dataset(data: &str) -> Vec<Sample> {
    data.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let values: Vec<f64> = line
                .split(',')
                .map(|v| v.trim().parse::<f64>())
                .collect::<Result<_, _>>()
                .ok()?;
            let (&class, features) = values.split_first()?;
            if features.is_empty() || !features.iter().all(|f| f.is_finite()) {
                return None;
            }
            Some(Sample {
                line: idx + 1,
                class_id: class_id(class)?,
                features: features.to_vec(),
            })
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
fn sample_stdev(values: &[f64], mean: f64) -> f64 {
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Fit per-class Gaussian parameters for every feature column.
pub fn fit(samples: &[Sample]) -> Result<NaiveBayesModel, TrainingError> {
    let first = samples.first().ok_or(TrainingError::EmptyDataset)?;
    let feature_count = first.features.len();

    let mut by_class: BTreeMap<u32, Vec<&[f64]>> = BTreeMap::new();
    for sample in samples {
        if sample.features.len() != feature_count {
            return Err(TrainingError::RaggedRow {
                line: sample.line,
                expected: feature_count,
                found: sample.features.len(),
            });
        }
        by_class
            .entry(sample.class_id)
            .or_default()
            .push(&sample.features);
    }

    let mut classes = BTreeMap::new();
    for (class_id, rows) in by_class {
        if rows.len() < 2 {
            return Err(TrainingError::TooFewRows {
                class_id,
                rows: rows.len(),
            });
        }
        let mut features = BTreeMap::new();
        for i in 0..feature_count {
            let column: Vec<f64> = rows.iter().map(|r| r[i]).collect();
            let mean = mean(&column);
            let mut stdev = sample_stdev(&column, mean);
            if stdev == 0.0 {
                stdev = MIN_STDEV;
            }
            features.insert(i, FeatureStats { mean, stdev });
        }
        classes.insert(class_id, features);
    }

    Ok(NaiveBayesModel::new(classes)?)
}

/// Fetch the raw dataset over HTTP.
#[cfg(feature = "server")]
#[tracing::instrument]
pub async fn download_dataset(url: &str) -> Result<String, TrainingError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| TrainingError::Download(e.to_string()))?;

    if !response.status().is_success() {
        return Err(TrainingError::Download(format!(
            "{url} returned {}",
            response.status()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| TrainingError::Download(e.to_string()))
}
