//! Synthetic epidemic series generator
//!
//! One record per calendar day: every field rides the same seasonal sine
//! phase plus independent uniform noise, and case counts carry a rare
//! additive spike. The outbreak flag is derived from the case count and is
//! never set on its own.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::DailyRecord;

/// Case count above which a day is flagged as an outbreak
pub const OUTBREAK_THRESHOLD: f64 = 150.0;

/// Per-day probability of an additive case spike
const SPIKE_PROBABILITY: f64 = 0.1;

/// Maximum magnitude of a case spike
const SPIKE_MAX_MAGNITUDE: f64 = 100.0;

/// First day of the generated series
fn series_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date")
}

/// Generate `days` consecutive daily records starting at the epoch.
///
/// A non-positive day count yields an empty series.
pub fn generate<R: Rng>(days: i64, rng: &mut R) -> Vec<DailyRecord> {
    if days <= 0 {
        return Vec::new();
    }

    let epoch = series_epoch();
    let mut records = Vec::with_capacity(days as usize);

    for i in 0..days {
        let seasonal = (i as f64 / days as f64 * std::f64::consts::TAU).sin();

        let spike = if rng.gen_bool(SPIKE_PROBABILITY) {
            rng.gen_range(0.0..SPIKE_MAX_MAGNITUDE)
        } else {
            0.0
        };
        let cases = (100.0 + 50.0 * seasonal + rng.gen_range(-15.0..15.0) + spike).max(0.0);

        let temperature = 20.0 + 15.0 * seasonal + rng.gen_range(-2.5..2.5);
        let humidity = 60.0 + 20.0 * seasonal + rng.gen_range(-5.0..5.0);
        let rainfall = (5.0 + 10.0 * seasonal + rng.gen_range(0.0..15.0)).max(0.0);

        let population_density = 1000.0 + rng.gen_range(-100.0..100.0);
        let mobility_index = 50.0 + 10.0 * seasonal + rng.gen_range(-5.0..5.0);

        records.push(DailyRecord {
            date: epoch + Duration::days(i),
            cases,
            temperature,
            humidity,
            rainfall,
            population_density,
            mobility_index,
            outbreak: (cases > OUTBREAK_THRESHOLD) as u8,
        });
    }

    records
}
