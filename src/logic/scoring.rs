//! Deterministic outbreak scoring
//!
//! Input: the five environmental/demographic factors.
//! Output: outbreak probability, binary decision, predicted case count, risk
//! tier. No randomness anywhere; identical input always scores identically.
//!
//! The function is total over the reals. Declared UI ranges live in
//! `FieldSpec::all()` and are never enforced here.

use crate::models::{PredictionInput, PredictionOutput, RiskLevel};

/// Weight sum is divided by this before clamping to [0, 1]
const WEIGHT_NORMALIZER: f64 = 1.5;

/// Probability above which the binary decision flips to outbreak
const DECISION_THRESHOLD: f64 = 0.5;

/// Probability above which risk is High
const HIGH_RISK_MIN: f64 = 0.7;

/// Probability above which risk is Medium
const MEDIUM_RISK_MIN: f64 = 0.4;

/// Score one instance.
pub fn score(input: &PredictionInput) -> PredictionOutput {
    // Two-level step weight per factor: elevated conditions contribute more
    let temperature_factor = step_weight(input.temperature, 25.0, 0.2, 0.1);
    let humidity_factor = step_weight(input.humidity, 70.0, 0.25, 0.15);
    let rainfall_factor = step_weight(input.rainfall, 20.0, 0.2, 0.1);
    let population_factor = step_weight(input.population_density, 1500.0, 0.25, 0.15);
    let mobility_factor = step_weight(input.mobility_index, 70.0, 0.2, 0.1);

    let probability = ((temperature_factor
        + humidity_factor
        + rainfall_factor
        + population_factor
        + mobility_factor)
        / WEIGHT_NORMALIZER)
        .clamp(0.0, 1.0);

    let predicted_cases = 80.0
        + 1.5 * input.temperature
        + 0.5 * input.humidity
        + 0.8 * input.rainfall
        + 0.01 * input.population_density
        + 0.7 * input.mobility_index;

    let risk_level = if probability > HIGH_RISK_MIN {
        RiskLevel::High
    } else if probability > MEDIUM_RISK_MIN {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    PredictionOutput {
        outbreak_probability: probability,
        outbreak_prediction: (probability > DECISION_THRESHOLD) as u8,
        predicted_cases,
        risk_level,
        recommendation: risk_level.recommendation().to_string(),
    }
}

fn step_weight(value: f64, threshold: f64, high: f64, low: f64) -> f64 {
    if value > threshold {
        high
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        temperature: f64,
        humidity: f64,
        rainfall: f64,
        population_density: f64,
        mobility_index: f64,
    ) -> PredictionInput {
        PredictionInput {
            temperature,
            humidity,
            rainfall,
            population_density,
            mobility_index,
        }
    }

    #[test]
    fn test_all_factors_elevated_is_high_risk() {
        // weights 0.2 + 0.25 + 0.2 + 0.25 + 0.2 = 1.1, probability 1.1/1.5
        let output = score(&input(30.0, 80.0, 25.0, 2000.0, 80.0));
        assert!((output.outbreak_probability - 1.1 / 1.5).abs() < 1e-12);
        assert_eq!(output.risk_level, RiskLevel::High);
        assert_eq!(output.outbreak_prediction, 1);
    }

    #[test]
    fn test_all_factors_low_is_low_risk() {
        // weights 0.1 + 0.15 + 0.1 + 0.15 + 0.1 = 0.6, probability exactly 0.4
        let output = score(&input(10.0, 50.0, 5.0, 500.0, 20.0));
        assert!((output.outbreak_probability - 0.4).abs() < 1e-12);
        // boundary: Medium requires strictly more than 0.4
        assert_eq!(output.risk_level, RiskLevel::Low);
        assert_eq!(output.outbreak_prediction, 0);
    }

    #[test]
    fn test_mixed_factors_is_medium_risk() {
        // weights 0.2 + 0.25 + 0.1 + 0.15 + 0.1 = 0.8, probability 0.8/1.5
        let output = score(&input(30.0, 80.0, 5.0, 500.0, 20.0));
        assert!((output.outbreak_probability - 0.8 / 1.5).abs() < 1e-12);
        assert_eq!(output.risk_level, RiskLevel::Medium);
        assert_eq!(output.outbreak_prediction, 1);
    }

    #[test]
    fn test_predicted_cases_formula() {
        let output = score(&input(30.0, 80.0, 25.0, 2000.0, 80.0));
        let expected = 80.0 + 1.5 * 30.0 + 0.5 * 80.0 + 0.8 * 25.0 + 0.01 * 2000.0 + 0.7 * 80.0;
        assert!((output.predicted_cases - expected).abs() < 1e-12);
    }

    #[test]
    fn test_probability_clamped_for_extreme_inputs() {
        for extreme in [f64::MAX, f64::MIN, 1e300, -1e300] {
            let output = score(&input(extreme, extreme, extreme, extreme, extreme));
            assert!((0.0..=1.0).contains(&output.outbreak_probability));
        }
    }

    #[test]
    fn test_scoring_is_pure() {
        let probe = input(22.5, 65.0, 12.0, 1600.0, 71.0);
        let a = score(&probe);
        let b = score(&probe);
        assert_eq!(a, b);
    }

    #[test]
    fn test_recommendation_matches_tier() {
        let high = score(&input(30.0, 80.0, 25.0, 2000.0, 80.0));
        assert_eq!(high.recommendation, RiskLevel::High.recommendation());

        let low = score(&input(10.0, 50.0, 5.0, 500.0, 20.0));
        assert_eq!(low.recommendation, RiskLevel::Low.recommendation());
    }
}
