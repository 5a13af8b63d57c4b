//! Out-of-band liveness probe for a running service.
//!
//! Issues a single GET (no retry) and reports status, latency and body.

use reqwest::Client;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// HTTP 200
    Healthy { status: u16, body: String },
    /// Any other HTTP status
    Unhealthy { status: u16, body: String },
    /// Connection, timeout or protocol failure
    Unreachable { error: String },
}

#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub url: String,
    pub latency: Duration,
    pub outcome: ProbeOutcome,
}

impl ProbeReport {
    pub fn is_healthy(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Healthy { .. })
    }

    pub fn latency_ms(&self) -> f64 {
        self.latency.as_secs_f64() * 1000.0
    }
}

pub struct HealthProbe {
    client: Client,
}

impl HealthProbe {
    /// Builds the HTTP client; fails if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()?;
        Ok(Self { client })
    }

    pub async fn check(&self, url: &str) -> ProbeReport {
        let start = Instant::now();
        let outcome = match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                if status == 200 {
                    ProbeOutcome::Healthy { status, body }
                } else {
                    ProbeOutcome::Unhealthy { status, body }
                }
            }
            Err(e) => ProbeOutcome::Unreachable {
                error: e.to_string(),
            },
        };

        ProbeReport {
            url: url.to_string(),
            latency: start.elapsed(),
            outcome,
        }
    }
}
