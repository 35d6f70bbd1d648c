//! Mock model result models
//!
//! All trainer results flow through one tagged union (`ModelOutput`) so the
//! dispatch layer can route every result kind uniformly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::prediction::PredictionOutput;

/// Which mock model a request addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Svm,
    Som,
    Lstm,
}

impl std::str::FromStr for ModelKind {
    type Err = UnknownModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svm" => Ok(ModelKind::Svm),
            "som" => Ok(ModelKind::Som),
            "lstm" => Ok(ModelKind::Lstm),
            other => Err(UnknownModelError(other.to_string())),
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelKind::Svm => write!(f, "svm"),
            ModelKind::Som => write!(f, "som"),
            ModelKind::Lstm => write!(f, "lstm"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown model '{0}', expected one of: svm, som, lstm")]
pub struct UnknownModelError(pub String);

/// Precision/recall/F1 for one class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

/// Per-class breakdown, keyed by class label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassReport {
    #[serde(rename = "0")]
    pub class_0: ClassMetrics,
    #[serde(rename = "1")]
    pub class_1: ClassMetrics,
}

/// One (feature, importance) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

/// Mock SVM training result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub accuracy: f64,
    pub report: ClassReport,
    pub feature_importance: Vec<FeatureImportance>,
}

/// One cell of the self-organizing map grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SomNode {
    pub x: usize,
    pub y: usize,
    pub weight: Vec<f64>,
    pub is_outbreak: bool,
}

/// Mock SOM clustering result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SomMap {
    pub grid_size: usize,
    pub data: Vec<SomNode>,
}

/// Mock LSTM training result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    pub rmse: f64,
    pub train_loss: f64,
    pub test_loss: f64,
    pub future_predictions: Vec<f64>,
    pub prediction_image: String,
    pub forecast_image: String,
}

/// Tagged union over every result kind the mock service can produce
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ModelOutput {
    Classification(ClassificationReport),
    Clustering(SomMap),
    Forecast(ForecastReport),
    Scoring(PredictionOutput),
}

/// Envelope for a completed train call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainResponse {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub output: ModelOutput,
    /// Chart-ready importance ranking, classifier runs only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<Vec<FeatureImportance>>,
}
