//! Outbreak prediction models

use serde::{Deserialize, Serialize};

/// Input to the outbreak scoring function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionInput {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub population_density: f64,
    pub mobility_index: f64,
}

/// Coarse bucketing of the outbreak probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Surveillance guidance shown next to the risk tier
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::High => {
                "Activate outbreak response protocols immediately. Implement control measures and public health interventions."
            }
            RiskLevel::Medium => {
                "Increase surveillance activities and prepare for potential outbreak response. Consider public health advisories."
            }
            RiskLevel::Low => {
                "Continue routine surveillance. No additional measures needed at this time."
            }
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Result of the deterministic scoring function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutput {
    pub outbreak_probability: f64,
    pub outbreak_prediction: u8,
    pub predicted_cases: f64,
    pub risk_level: RiskLevel,
    pub recommendation: String,
}

/// Declared input range for one prediction form field.
///
/// Widget bounds only - the scoring function accepts any real value.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl FieldSpec {
    /// The five prediction inputs with their UI bounds
    pub fn all() -> Vec<FieldSpec> {
        vec![
            FieldSpec {
                name: "temperature",
                label: "Temperature (°C)",
                min: -20.0,
                max: 50.0,
                step: 0.1,
                default: 20.0,
            },
            FieldSpec {
                name: "humidity",
                label: "Humidity (%)",
                min: 0.0,
                max: 100.0,
                step: 0.1,
                default: 60.0,
            },
            FieldSpec {
                name: "rainfall",
                label: "Rainfall (mm)",
                min: 0.0,
                max: 500.0,
                step: 0.1,
                default: 5.0,
            },
            FieldSpec {
                name: "population_density",
                label: "Population Density (per km²)",
                min: 0.0,
                max: 5000.0,
                step: 1.0,
                default: 1000.0,
            },
            FieldSpec {
                name: "mobility_index",
                label: "Mobility Index",
                min: 0.0,
                max: 100.0,
                step: 0.1,
                default: 50.0,
            },
        ]
    }
}
