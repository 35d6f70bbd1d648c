//! EpiScope Backend Server
//!
//! Synthetic epidemic data and mock inference service for the EpiScope
//! dashboard. Every payload is fabricated per call: there is no database,
//! no trained model, and no state shared between requests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     EPISCOPE API                        │
//! ├─────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────────┐  ┌─────────────────┐  │
//! │  │  Router   │  │  Handlers     │  │  Domain Logic   │  │
//! │  │  (Axum)   │─▶│  (latency +   │─▶│  (pure, seeded  │  │
//! │  │           │  │   per-call    │  │   generators &  │  │
//! │  │           │  │   RNG)        │  │   scoring)      │  │
//! │  └───────────┘  └───────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod logic;
mod models;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging (structured JSON in production)
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "episcope_api=debug,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("EpiScope API starting...");
    tracing::info!(
        "Series: {} days, latency simulation {}",
        config.series_days,
        if config.simulate_latency { "on" } else { "off" }
    );
    if let Some(seed) = config.rng_seed {
        tracing::warn!("RNG_SEED={} set, all calls are deterministic", seed);
    }

    // Build application state
    let state = AppState { config };

    // Build router
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let app = create_router(state);

    // Start server
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        // Synthetic series
        .route("/api/v1/data/epidemic", get(handlers::data::epidemic))
        .route("/api/v1/data/summary", get(handlers::data::summary))
        .route(
            "/api/v1/data/correlations",
            get(handlers::data::correlations),
        )
        // Mock model training (svm | som | lstm)
        .route("/api/v1/models/:model/train", post(handlers::models::train))
        // Outbreak scoring
        .route("/api/v1/predict", post(handlers::predict::predict))
        .route("/api/v1/predict/fields", get(handlers::predict::fields))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Fallback for unmatched routes
async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
