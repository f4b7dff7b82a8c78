//! Status command implementation
//!
//! Reports whether the local analysis service is reachable and has its
//! NLP model loaded.

use crate::adapters::analyzer::{AnalyzerService, HttpAnalyzerClient};
use crate::config::load_config;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let client = HttpAnalyzerClient::new(&config.service)?;
        println!("🔍 Checking analysis service at {}", client.base_url());
        println!();

        match client.health().await {
            Ok(health) => {
                if health.is_healthy() {
                    println!("✅ Service is healthy");
                } else {
                    println!("⚠️  Service responded but is not ready");
                }
                println!("  Status: {}", health.status);
                println!("  Model loaded: {}", health.model_loaded);
                println!("  Version: {}", health.version);
                Ok(if health.is_healthy() { 0 } else { 3 })
            }
            Err(e) => {
                println!("❌ Service is not reachable");
                println!("   Error: {e}");
                Ok(3)
            }
        }
    }
}
