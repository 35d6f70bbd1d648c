//! Outbreak prediction handlers

use axum::{extract::State, Json};

use super::simulate_latency;
use crate::logic::scoring;
use crate::models::{FieldSpec, ModelOutput, PredictionInput};
use crate::{AppResult, AppState};

const PREDICT_DELAY_MS: u64 = 1500;

/// Score one instance deterministically.
pub async fn predict(
    State(state): State<AppState>,
    Json(input): Json<PredictionInput>,
) -> AppResult<Json<ModelOutput>> {
    simulate_latency(&state.config, PREDICT_DELAY_MS).await;

    Ok(Json(ModelOutput::Scoring(scoring::score(&input))))
}

/// Declared input ranges for the prediction form.
///
/// Widget bounds only; `predict` accepts any numeric input.
pub async fn fields() -> Json<Vec<FieldSpec>> {
    Json(FieldSpec::all())
}
