//! Liveness check against one or more running API instances.
//!
//! Prints status, latency and body for each URL. Exits non-zero if any check failed.

use clap::Parser;
use loan_default_api::infrastructure::health_probe::{HealthProbe, ProbeOutcome};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Health endpoint URLs to check
    #[arg(default_values_t = vec!["http://127.0.0.1:8000/health".to_string()])]
    urls: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let checker = match HealthProbe::new(Duration::from_secs(args.timeout)) {
        Ok(checker) => checker,
        Err(e) => {
            eprintln!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut all_passed = true;
    for url in &args.urls {
        println!("Testing backend health check at {}...", url);
        let report = checker.check(url).await;

        match &report.outcome {
            ProbeOutcome::Healthy { status, body } => {
                println!("Health check passed! Status: {}", status);
                println!("Latency: {:.2}ms", report.latency_ms());
                println!("Response: {}", body);
            }
            ProbeOutcome::Unhealthy { status, body } => {
                println!("Health check failed! Status: {}", status);
                println!("Response: {}", body);
            }
            ProbeOutcome::Unreachable { error } => {
                println!("Health check failed with error: {}", error);
            }
        }
        println!();

        all_passed &= report.is_healthy();
    }

    if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
