//! HTTP server configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Server environment configuration
#[derive(Debug, Clone)]
pub struct ServerEnvConfig {
    pub host: String,
    pub port: u16,
    /// Worker threads; `None` leaves the runtime default (one per core)
    pub workers: Option<usize>,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            workers: None,
        }
    }
}

impl ServerEnvConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {}", raw))?,
            Err(_) => 8000,
        };

        let workers = match env::var("HTTP_WORKERS") {
            Ok(raw) => {
                let n = raw
                    .parse::<usize>()
                    .with_context(|| format!("Invalid HTTP_WORKERS: {}", raw))?;
                if n == 0 {
                    anyhow::bail!("Invalid HTTP_WORKERS: must be at least 1");
                }
                Some(n)
            }
            Err(_) => None,
        };

        Ok(Self {
            host,
            port,
            workers,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
