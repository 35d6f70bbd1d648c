//! Epidemic data handlers
//!
//! The series is regenerated in full on every call; nothing is cached or
//! stored. Summary and correlation calls derive from a fresh series of
//! their own.

use axum::{extract::State, Json};

use super::{call_rng, simulate_latency};
use crate::logic::{analysis, series};
use crate::models::{DailyRecord, FactorCorrelation, SeriesSummary};
use crate::{AppResult, AppState};

const FETCH_DELAY_MS: u64 = 1500;

/// Full synthetic daily series
pub async fn epidemic(State(state): State<AppState>) -> AppResult<Json<Vec<DailyRecord>>> {
    simulate_latency(&state.config, FETCH_DELAY_MS).await;

    let mut rng = call_rng(&state.config);
    Ok(Json(series::generate(state.config.series_days, &mut rng)))
}

/// Headline statistics over the series
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<SeriesSummary>> {
    simulate_latency(&state.config, FETCH_DELAY_MS).await;

    let mut rng = call_rng(&state.config);
    let records = series::generate(state.config.series_days, &mut rng);
    Ok(Json(analysis::summarize(&records)))
}

/// Factor mean differences between outbreak and calm days
pub async fn correlations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FactorCorrelation>>> {
    simulate_latency(&state.config, FETCH_DELAY_MS).await;

    let mut rng = call_rng(&state.config);
    let records = series::generate(state.config.series_days, &mut rng);
    Ok(Json(analysis::factor_correlations(&records)))
}
