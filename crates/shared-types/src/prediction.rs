use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field values captured from the prediction form at submission time.
///
/// Keys are the fields' `name` attributes. Serializes as a flat JSON object
/// of strings. Inserting a name twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct FormInput(BTreeMap<String, String>);

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

}

impl<K, V> FromIterator<(K, V)> for FormInput
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut input = FormInput::new();
        for (name, value) in iter {
            input.insert(name, value);
        }
        input
    }
}

/// Confidence indicator as returned by a prediction backend.
///
/// Our service sends a preformatted string (`"87.34%"`), but a bare JSON
/// number is accepted too. Either way it is rendered as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum Confidence {
    Text(String),
    Number(f64),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Text(text) => f.write_str(text),
            Confidence::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Confidence {
    fn from(text: &str) -> Self {
        Confidence::Text(text.to_string())
    }
}

/// Successful `POST /predict` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PredictionResponse {
    /// Human-readable cultivar label.
    pub prediction: String,
    pub confidence: Confidence,
}

/// `GET /health` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    pub status: String,
    /// `loaded` once the model is in memory, `missing` otherwise.
    pub model: String,
    pub uptime_seconds: u64,
    pub version: String,
}
