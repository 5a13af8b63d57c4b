//! Loan Default Prediction API server
//!
//! Loads the scaler and classifier artifacts, then serves predictions over HTTP.
//! Metrics are pushed via structured JSON logs to stdout.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=model/best_rf.json SCALER_PATH=model/scaler.json cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `HOST` / `PORT` - Bind address (default: 127.0.0.1:8000)
//! - `HTTP_WORKERS` - Worker threads (default: one per core)
//! - `MODEL_PATH` / `SCALER_PATH` - Artifact locations
//! - `OBSERVABILITY_ENABLED` - Enable metrics reporting (default: true)
//! - `OBSERVABILITY_INTERVAL` - Interval in seconds between metric outputs (default: 60)

use anyhow::{Context, Result};
use loan_default_api::application::ml::ModelStore;
use loan_default_api::config::Config;
use loan_default_api::infrastructure::observability::{Metrics, MetricsReporter};
use loan_default_api::interfaces::http::{self, AppState};
use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!(
        "Loan Default Prediction API {} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Bind={}:{}, Model={:?}, Scaler={:?}",
        config.server.host,
        config.server.port,
        config.artifacts.model_path,
        config.artifacts.scaler_path
    );

    // Artifacts must load before the port is bound
    let store = match ModelStore::load(&config.artifacts) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load model artifacts: {}", e);
            return Err(e).context("Model store could not be initialized");
        }
    };

    let metrics = Metrics::new()?;

    if config.observability.enabled {
        let reporter = MetricsReporter::new(
            metrics.clone(),
            store.model_name(),
            store.model_version(),
            config.observability.interval_secs,
        );

        actix_web::rt::spawn(async move {
            reporter.run().await;
        });

        info!(
            "Metrics reporter started (interval: {}s)",
            config.observability.interval_secs
        );
    } else {
        info!("Metrics reporting disabled.");
    }

    http::serve(&config.server, AppState { store, metrics }).await?;

    info!("Server stopped.");
    Ok(())
}
