//! Push-based observability
//!
//! Metrics are kept in a prometheus registry and pushed as structured JSON logs
//! to stdout on an interval. No metrics endpoint is exposed.

pub mod metrics;
pub mod reporter;

pub use metrics::{Metrics, RejectReason};
pub use reporter::MetricsReporter;
