//! Prometheus metrics definitions for the prediction service
//!
//! All metrics use the `loan_api_` prefix.

use crate::domain::ml::LoanLabel;
use prometheus::{
    CounterVec, Gauge, Histogram, HistogramOpts, HistogramTimer, Opts, Registry, TextEncoder,
    core::{AtomicF64, GenericGauge},
};
use std::sync::Arc;

/// Why a `/predict` request did not produce a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    FeatureCount,
    MalformedBody,
    Inference,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::FeatureCount => "feature_count",
            RejectReason::MalformedBody => "malformed_body",
            RejectReason::Inference => "inference",
        }
    }
}

/// Prometheus metrics for the inference service
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Predictions served, by label
    pub predictions_total: CounterVec,
    /// Rejected prediction requests, by reason
    pub rejected_requests_total: CounterVec,
    /// Scale + classify latency in seconds
    pub inference_latency_seconds: Histogram,
    /// Uptime in seconds
    pub uptime_seconds: GenericGauge<AtomicF64>,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let predictions_total = CounterVec::new(
            Opts::new("loan_api_predictions_total", "Predictions served by label"),
            &["label"],
        )?;
        registry.register(Box::new(predictions_total.clone()))?;

        let rejected_requests_total = CounterVec::new(
            Opts::new(
                "loan_api_rejected_requests_total",
                "Prediction requests rejected by reason",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(rejected_requests_total.clone()))?;

        let inference_latency_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "loan_api_inference_latency_seconds",
                "Scaling and classification latency in seconds",
            )
            .buckets(vec![
                0.0001, 0.00025, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1,
            ]),
        )?;
        registry.register(Box::new(inference_latency_seconds.clone()))?;

        let uptime_seconds = Gauge::with_opts(Opts::new(
            "loan_api_uptime_seconds",
            "Server uptime in seconds",
        ))?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            predictions_total,
            rejected_requests_total,
            inference_latency_seconds,
            uptime_seconds,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    /// Times one scale + classify call; records into the latency histogram on drop.
    pub fn start_inference_timer(&self) -> HistogramTimer {
        self.inference_latency_seconds.start_timer()
    }

    pub fn inc_predictions(&self, label: LoanLabel) {
        self.predictions_total
            .with_label_values(&[label.as_str()])
            .inc();
    }

    pub fn inc_rejected(&self, reason: RejectReason) {
        self.rejected_requests_total
            .with_label_values(&[reason.as_str()])
            .inc();
    }

    pub fn predictions_count(&self, label: LoanLabel) -> u64 {
        self.predictions_total
            .with_label_values(&[label.as_str()])
            .get() as u64
    }

    pub fn rejected_count(&self, reason: RejectReason) -> u64 {
        self.rejected_requests_total
            .with_label_values(&[reason.as_str()])
            .get() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.uptime_seconds.set(1.0);
        assert!(metrics.render().contains("loan_api_"));
    }

    #[test]
    fn test_prediction_counter_by_label() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.inc_predictions(LoanLabel::Default);
        metrics.inc_predictions(LoanLabel::Default);
        metrics.inc_predictions(LoanLabel::NonDefault);

        assert_eq!(metrics.predictions_count(LoanLabel::Default), 2);
        assert_eq!(metrics.predictions_count(LoanLabel::NonDefault), 1);
        let output = metrics.render();
        assert!(output.contains("loan_api_predictions_total"));
        assert!(output.contains("Non-Default"));
    }

    #[test]
    fn test_inference_timer_records_on_drop() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        {
            let _timer = metrics.start_inference_timer();
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        let histogram = &metrics.inference_latency_seconds;
        assert_eq!(histogram.get_sample_count(), 1);
        assert!(histogram.get_sample_sum() >= 0.01);
    }

    #[test]
    fn test_rejection_counter() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.inc_rejected(RejectReason::FeatureCount);
        assert_eq!(metrics.rejected_count(RejectReason::FeatureCount), 1);
        assert_eq!(metrics.rejected_count(RejectReason::MalformedBody), 0);
        assert!(metrics.render().contains("feature_count"));
    }
}
