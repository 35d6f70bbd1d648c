//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Number of days in the synthetic epidemic series
    pub series_days: i64,

    /// Grid dimension for the self-organizing map
    pub som_grid_size: usize,

    /// Fixed RNG seed; when set, every call is deterministic
    pub rng_seed: Option<u64>,

    /// Simulate backend latency on mock calls
    pub simulate_latency: bool,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            series_days: env::var("SERIES_DAYS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(365),

            som_grid_size: env::var("SOM_GRID_SIZE")
                .ok()
                .and_then(|g| g.parse().ok())
                .unwrap_or(10),

            rng_seed: env::var("RNG_SEED").ok().and_then(|s| s.parse().ok()),

            simulate_latency: env::var("SIMULATE_LATENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
