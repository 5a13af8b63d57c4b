//! Configuration module for the Loan Default Prediction API.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Server, Artifacts, and Observability.

mod artifact_config;
mod observability_config;
mod server_config;

pub use artifact_config::ArtifactEnvConfig;
pub use observability_config::ObservabilityEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::Result;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub artifacts: ArtifactEnvConfig,
    pub observability: ObservabilityEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerEnvConfig::from_env()?,
            artifacts: ArtifactEnvConfig::from_env(),
            observability: ObservabilityEnvConfig::from_env(),
        })
    }
}
