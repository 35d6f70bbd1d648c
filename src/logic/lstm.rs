//! Mock LSTM trainer
//!
//! Fabricates an 8-step case forecast with a mild upward trend and bounded
//! noise, plus jittered quality metrics. The image fields point at externally
//! rendered plots; producing those plots is outside this service.

use rand::Rng;

use crate::models::ForecastReport;

/// Number of future steps a forecast covers
pub const FORECAST_HORIZON: usize = 8;

/// Case level the forecast starts from
const BASE_FORECAST_CASES: f64 = 120.0;

/// Linear drift added per step
const TREND_PER_STEP: f64 = 5.0;

/// Half-width of the uniform per-step noise
const STEP_NOISE: f64 = 10.0;

const BASE_RMSE: f64 = 12.7;
const BASE_TRAIN_LOSS: f64 = 0.0234;
const BASE_TEST_LOSS: f64 = 0.0312;

const PREDICTION_IMAGE_URL: &str =
    "https://images.pexels.com/photos/669118/pexels-photo-669118.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";
const FORECAST_IMAGE_URL: &str =
    "https://images.pexels.com/photos/669616/pexels-photo-669616.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

/// Produce a forecast report over the fixed horizon.
pub fn train<R: Rng>(rng: &mut R) -> ForecastReport {
    let future_predictions = (0..FORECAST_HORIZON)
        .map(|step| {
            BASE_FORECAST_CASES
                + TREND_PER_STEP * step as f64
                + rng.gen_range(-STEP_NOISE..STEP_NOISE)
        })
        .collect();

    ForecastReport {
        rmse: BASE_RMSE + rng.gen_range(-0.5..0.5),
        train_loss: BASE_TRAIN_LOSS * rng.gen_range(0.9..1.1),
        test_loss: BASE_TEST_LOSS * rng.gen_range(0.9..1.1),
        future_predictions,
        prediction_image: PREDICTION_IMAGE_URL.to_string(),
        forecast_image: FORECAST_IMAGE_URL.to_string(),
    }
}
