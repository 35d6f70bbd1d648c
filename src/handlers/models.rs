//! Model training handlers
//!
//! One dispatch route covers every mock trainer; the result kind travels in
//! the tagged `ModelOutput` union.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use super::{call_rng, simulate_latency};
use crate::logic::{features, lstm, som, svm};
use crate::models::{ModelKind, ModelOutput, TrainResponse};
use crate::{AppError, AppResult, AppState};

const SVM_DELAY_MS: u64 = 2000;
const SOM_DELAY_MS: u64 = 3000;
const LSTM_DELAY_MS: u64 = 4000;

/// Train the addressed mock model and return its tagged result.
pub async fn train(
    State(state): State<AppState>,
    Path(model): Path<String>,
) -> AppResult<Json<TrainResponse>> {
    let kind: ModelKind = model
        .parse()
        .map_err(|e: crate::models::UnknownModelError| AppError::BadRequest(e.to_string()))?;

    let delay = match kind {
        ModelKind::Svm => SVM_DELAY_MS,
        ModelKind::Som => SOM_DELAY_MS,
        ModelKind::Lstm => LSTM_DELAY_MS,
    };
    simulate_latency(&state.config, delay).await;

    let mut rng = call_rng(&state.config);
    let (output, chart) = match kind {
        ModelKind::Svm => {
            let report = svm::train(&mut rng);
            // chart-ready top-10 labels are a display concern, shaped here
            // at the boundary rather than inside the trainer
            let chart = features::display_ranking(&report.feature_importance);
            (ModelOutput::Classification(report), Some(chart))
        }
        ModelKind::Som => (
            ModelOutput::Clustering(som::generate(state.config.som_grid_size, &mut rng)),
            None,
        ),
        ModelKind::Lstm => (ModelOutput::Forecast(lstm::train(&mut rng)), None),
    };

    tracing::info!(model = %kind, "mock training run complete");

    Ok(Json(TrainResponse {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        output,
        chart,
    }))
}
