//! Epidemic series models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One synthetic daily observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub cases: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub population_density: f64,
    pub mobility_index: f64,
    /// 1 iff `cases` is above the outbreak threshold, derived, never set independently
    pub outbreak: u8,
}

/// Aggregate statistics over a generated series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub total_cases: i64,
    pub avg_cases: i64,
    pub max_cases: i64,
    pub outbreak_days: i64,
    /// Share of outbreak days, percent with one decimal
    pub outbreak_percentage: f64,
}

/// Mean difference of one factor between outbreak and non-outbreak days
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorCorrelation {
    pub factor: String,
    pub value: f64,
}
