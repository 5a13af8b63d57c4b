//! Push-based metrics reporter
//!
//! Periodically outputs metrics as structured JSON to stdout.

use crate::domain::ml::LoanLabel;
use crate::infrastructure::observability::metrics::{Metrics, RejectReason};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Metrics snapshot for JSON output
#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub model: ModelSnapshot,
    pub predictions: PredictionSnapshot,
    pub rejected: RejectedSnapshot,
}

#[derive(Serialize)]
pub struct ModelSnapshot {
    pub name: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct PredictionSnapshot {
    pub total: u64,
    pub default: u64,
    pub non_default: u64,
    pub mean_latency_ms: f64,
}

#[derive(Serialize)]
pub struct RejectedSnapshot {
    pub feature_count: u64,
    pub malformed_body: u64,
    pub inference: u64,
}

/// Push-based metrics reporter
///
/// Outputs metrics as structured JSON logs on a configurable interval.
pub struct MetricsReporter {
    metrics: Metrics,
    model: ModelSnapshot,
    start_time: Instant,
    interval: Duration,
}

impl MetricsReporter {
    pub fn new(
        metrics: Metrics,
        model_name: &str,
        model_version: &str,
        interval_seconds: u64,
    ) -> Self {
        Self {
            metrics,
            model: ModelSnapshot {
                name: model_name.to_string(),
                version: model_version.to_string(),
            },
            start_time: Instant::now(),
            interval: Duration::from_secs(interval_seconds),
        }
    }

    /// Run the reporter in a loop, outputting metrics periodically
    pub async fn run(self) {
        info!(
            "MetricsReporter: Starting push-based metrics (interval: {:?})",
            self.interval
        );

        loop {
            tokio::time::sleep(self.interval).await;

            let snapshot = self.collect_snapshot();
            match serde_json::to_string(&snapshot) {
                Ok(json) => {
                    // Prefix so logs can be easily filtered
                    println!("METRICS_JSON:{}", json);
                    info!(
                        "Predictions: {} | Rejected: {} | Uptime: {}s",
                        snapshot.predictions.total,
                        snapshot.rejected.feature_count
                            + snapshot.rejected.malformed_body
                            + snapshot.rejected.inference,
                        snapshot.uptime_seconds
                    );
                }
                Err(e) => warn!("Failed to serialize metrics: {}", e),
            }
            debug!("Prometheus exposition:\n{}", self.metrics.render());
        }
    }

    fn collect_snapshot(&self) -> MetricsSnapshot {
        let uptime = self.start_time.elapsed().as_secs();
        self.metrics.uptime_seconds.set(uptime as f64);

        let default = self.metrics.predictions_count(LoanLabel::Default);
        let non_default = self.metrics.predictions_count(LoanLabel::NonDefault);

        let histogram = &self.metrics.inference_latency_seconds;
        let samples = histogram.get_sample_count();
        let mean_latency_ms = if samples > 0 {
            histogram.get_sample_sum() / samples as f64 * 1000.0
        } else {
            0.0
        };

        MetricsSnapshot {
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime_seconds: uptime,
            version: env!("CARGO_PKG_VERSION").to_string(),
            model: ModelSnapshot {
                name: self.model.name.clone(),
                version: self.model.version.clone(),
            },
            predictions: PredictionSnapshot {
                total: default + non_default,
                default,
                non_default,
                mean_latency_ms,
            },
            rejected: RejectedSnapshot {
                feature_count: self.metrics.rejected_count(RejectReason::FeatureCount),
                malformed_body: self.metrics.rejected_count(RejectReason::MalformedBody),
                inference: self.metrics.rejected_count(RejectReason::Inference),
            },
        }
    }
}
