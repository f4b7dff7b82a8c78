//! Entities command implementation
//!
//! Lists the entity types the analysis service can detect, marking the
//! Swiss-specific recognizers and whether each type is currently enabled
//! in the detection profile.

use crate::adapters::analyzer::{AnalyzerService, HttpAnalyzerClient};
use crate::config::load_config;
use clap::Args;

/// Arguments for the entities command
#[derive(Args, Debug)]
pub struct EntitiesArgs {
    /// Only show Swiss-specific entity types
    #[arg(long)]
    pub swiss_only: bool,
}

impl EntitiesArgs {
    /// Execute the entities command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let client = HttpAnalyzerClient::new(&config.service)?;

        let entities = match client.supported_entities().await {
            Ok(entities) => entities,
            Err(e) => {
                eprintln!("❌ Analysis service request failed: {e}");
                eprintln!("   Is the service running at {}?", client.base_url());
                return Ok(3);
            }
        };

        println!("Supported entity types:");
        println!();
        for info in entities {
            if self.swiss_only && !info.is_swiss {
                continue;
            }
            let enabled = config
                .detection
                .enabled_entities
                .contains(&info.entity_type);
            println!(
                "  {} {:<16} {}{}",
                if enabled { "✅" } else { "  " },
                info.entity_type,
                info.description,
                if info.is_swiss { " 🇨🇭" } else { "" }
            );
        }
        println!();
        println!("✅ = enabled in the current detection profile");

        Ok(0)
    }
}
