//! Series analytics
//!
//! Aggregates a generated series into the scorecard and factor analysis the
//! dashboard shows: headline counts, plus each factor's mean difference
//! between outbreak and non-outbreak days.

use crate::models::{DailyRecord, FactorCorrelation, SeriesSummary};

/// The five factors the analysis compares, with display names
const FACTORS: &[(&str, fn(&DailyRecord) -> f64)] = &[
    ("Temperature", |r| r.temperature),
    ("Humidity", |r| r.humidity),
    ("Rainfall", |r| r.rainfall),
    ("Population Density", |r| r.population_density),
    ("Mobility Index", |r| r.mobility_index),
];

/// Headline statistics over a series. Empty input yields a zeroed summary.
pub fn summarize(series: &[DailyRecord]) -> SeriesSummary {
    if series.is_empty() {
        return SeriesSummary {
            total_cases: 0,
            avg_cases: 0,
            max_cases: 0,
            outbreak_days: 0,
            outbreak_percentage: 0.0,
        };
    }

    let total: f64 = series.iter().map(|r| r.cases).sum();
    let max = series.iter().map(|r| r.cases).fold(0.0, f64::max);
    let outbreak_days = series.iter().filter(|r| r.outbreak == 1).count() as i64;
    let percentage = outbreak_days as f64 / series.len() as f64 * 100.0;

    SeriesSummary {
        total_cases: total.round() as i64,
        avg_cases: (total / series.len() as f64).round() as i64,
        max_cases: max.round() as i64,
        outbreak_days,
        outbreak_percentage: (percentage * 10.0).round() / 10.0,
    }
}

/// Mean difference of each factor between outbreak and non-outbreak days,
/// sorted by absolute value descending.
///
/// Positive values mean the factor runs higher during outbreaks. A factor
/// reports 0 when the series has no outbreak days or no calm days to
/// compare against.
pub fn factor_correlations(series: &[DailyRecord]) -> Vec<FactorCorrelation> {
    let mut correlations: Vec<FactorCorrelation> = FACTORS
        .iter()
        .map(|(name, accessor)| FactorCorrelation {
            factor: name.to_string(),
            value: mean_difference(series, *accessor),
        })
        .collect();

    correlations.sort_by(|a, b| {
        b.value
            .abs()
            .partial_cmp(&a.value.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    correlations
}

fn mean_difference(series: &[DailyRecord], accessor: fn(&DailyRecord) -> f64) -> f64 {
    let outbreak: Vec<f64> = series
        .iter()
        .filter(|r| r.outbreak == 1)
        .map(accessor)
        .collect();
    let calm: Vec<f64> = series
        .iter()
        .filter(|r| r.outbreak == 0)
        .map(accessor)
        .collect();

    if outbreak.is_empty() || calm.is_empty() {
        return 0.0;
    }

    mean(&outbreak) - mean(&calm)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, cases: f64, temperature: f64) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            cases,
            temperature,
            humidity: 60.0,
            rainfall: 5.0,
            population_density: 1000.0,
            mobility_index: 50.0,
            outbreak: (cases > 150.0) as u8,
        }
    }

    #[test]
    fn test_summary_math() {
        let series = vec![
            record(1, 100.0, 20.0),
            record(2, 200.0, 30.0),
            record(3, 120.0, 22.0),
            record(4, 180.0, 28.0),
        ];

        let summary = summarize(&series);
        assert_eq!(summary.total_cases, 600);
        assert_eq!(summary.avg_cases, 150);
        assert_eq!(summary.max_cases, 200);
        assert_eq!(summary.outbreak_days, 2);
        assert_eq!(summary.outbreak_percentage, 50.0);
    }

    #[test]
    fn test_summary_rounds_percentage_to_one_decimal() {
        let series = vec![
            record(1, 200.0, 20.0),
            record(2, 100.0, 20.0),
            record(3, 100.0, 20.0),
        ];
        // 1 of 3 days -> 33.333...%
        assert_eq!(summarize(&series).outbreak_percentage, 33.3);
    }

    #[test]
    fn test_empty_series_summary_is_zeroed() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_cases, 0);
        assert_eq!(summary.outbreak_days, 0);
        assert_eq!(summary.outbreak_percentage, 0.0);
    }

    #[test]
    fn test_correlations_report_mean_difference() {
        // outbreak days at 30.0 and 28.0 degrees, calm at 20.0 and 22.0
        let series = vec![
            record(1, 100.0, 20.0),
            record(2, 200.0, 30.0),
            record(3, 120.0, 22.0),
            record(4, 180.0, 28.0),
        ];

        let correlations = factor_correlations(&series);
        let temperature = correlations
            .iter()
            .find(|c| c.factor == "Temperature")
            .unwrap();
        assert!((temperature.value - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_correlations_sorted_by_magnitude() {
        let series = vec![
            record(1, 100.0, 20.0),
            record(2, 200.0, 30.0),
            record(3, 120.0, 22.0),
            record(4, 180.0, 28.0),
        ];

        let correlations = factor_correlations(&series);
        assert_eq!(correlations.len(), 5);
        for pair in correlations.windows(2) {
            assert!(pair[0].value.abs() >= pair[1].value.abs());
        }
        // only temperature varies in this fixture
        assert_eq!(correlations[0].factor, "Temperature");
    }

    #[test]
    fn test_correlations_zero_without_both_groups() {
        let calm_only = vec![record(1, 100.0, 20.0), record(2, 120.0, 30.0)];
        for c in factor_correlations(&calm_only) {
            assert_eq!(c.value, 0.0);
        }

        for c in factor_correlations(&[]) {
            assert_eq!(c.value, 0.0);
        }
    }
}
