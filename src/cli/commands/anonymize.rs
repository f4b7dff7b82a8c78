//! Anonymize command implementation
//!
//! Sends a document to the analysis service, loads the detection result
//! into the entity store, and prints the client-side anonymized rendering.
//! The service's own `anonymized_text` is ignored: the store recomputes
//! the output, the same path the interactive review UI uses.

use crate::adapters::analyzer::{AnalyzerService, HttpAnalyzerClient};
use crate::config::load_config;
use crate::core::EntityStore;
use crate::domain::AnonymizationStyle;
use clap::Args;
use std::fs;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Input text file
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub input: Option<String>,

    /// Anonymize a literal string instead of a file
    #[arg(short, long)]
    pub text: Option<String>,

    /// Anonymization style (replace, mask, hash, redact); defaults to the
    /// configured style
    #[arg(short, long)]
    pub style: Option<AnonymizationStyle>,

    /// Write the anonymized text to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the detected entity groups after the anonymized text
    #[arg(long)]
    pub show_entities: bool,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let text = match (&self.input, &self.text) {
            (Some(path), None) => match fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("❌ Failed to read {path}: {e}");
                    return Ok(5);
                }
            },
            (None, Some(text)) => text.clone(),
            _ => {
                eprintln!("❌ Provide either an input file or --text");
                return Ok(2);
            }
        };

        if text.trim().is_empty() {
            eprintln!("❌ Input text is empty");
            return Ok(2);
        }

        let style = self.style.unwrap_or(config.detection.style);
        let client = HttpAnalyzerClient::new(&config.service)?;

        tracing::info!(
            base_url = client.base_url(),
            style = %style,
            chars = text.chars().count(),
            "Requesting anonymization"
        );

        let result = match client.anonymize(&text, &config.detection, style).await {
            Ok(result) => result,
            Err(e) => {
                eprintln!("❌ Analysis service request failed: {e}");
                eprintln!("   Is the service running at {}?", client.base_url());
                return Ok(3);
            }
        };

        // Recompute the rendering client-side from the entity list
        let mut store = EntityStore::new();
        store.initialize(result.original_text, result.entities);
        let anonymized = store.anonymized_text(style);

        match &self.output {
            Some(path) => {
                fs::write(path, &anonymized)?;
                println!("✅ Anonymized text written to {path}");
            }
            None => println!("{anonymized}"),
        }

        if self.show_entities {
            let groups = store.grouped_entities();
            println!();
            println!("Detected entities ({} groups):", groups.len());
            for group in groups {
                println!(
                    "  {} [{}] ×{} (score {:.2})",
                    group.text, group.entity_type, group.count, group.score
                );
            }
        }

        Ok(0)
    }
}
