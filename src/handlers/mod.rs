//! HTTP handlers

pub mod data;
pub mod health;
pub mod models;
pub mod predict;


use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use crate::config::Config;

/// Per-call random source: fixed seed when configured, OS entropy otherwise.
///
/// Every handler builds its own rng, so concurrent calls never share state.
pub(crate) fn call_rng(config: &Config) -> StdRng {
    match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Stand-in for backend processing time.
///
/// A plain awaited sleep inside the handler future: if the client drops the
/// connection the future is dropped with it, cancelling the call.
pub(crate) async fn simulate_latency(config: &Config, millis: u64) {
    if config.simulate_latency {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}
