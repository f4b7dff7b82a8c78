//! Init command implementation
//!
//! Implements the `init` command for generating a sample configuration
//! file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "anonymize.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::default_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: anonymize validate-config");
                println!("  3. Check the analysis service: anonymize status");
                println!("  4. Anonymize a document: anonymize anonymize letter.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate the sample configuration
    fn default_config() -> &'static str {
        r#"# Anonymize Configuration File
# Swiss PII review and anonymization

[application]
name = "anonymize"
# Log level: trace, debug, info, warn, error
log_level = "info"

[service]
# Local analysis service (sidecar)
base_url = "http://127.0.0.1:14200"
timeout_seconds = 30

[detection]
# Entity types to detect; run `anonymize entities` for the full list
enabled_entities = [
    "PERSON",
    "EMAIL_ADDRESS",
    "PHONE_NUMBER",
    "LOCATION",
    "DATE_TIME",
    "IBAN_CODE",
    "CH_AHV",
    "CH_PHONE",
    "CH_POSTAL_CODE",
    "CH_IBAN",
]
# Minimum confidence score (0.0 - 1.0)
score_threshold = 0.5
# Anonymization style: replace, mask, hash, redact
style = "replace"

[logging]
# Enable JSON file logging in addition to console output
local_enabled = false
local_path = "./logs"
# Rotation: daily, hourly
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_and_validates() {
        let config: crate::config::AnonymizeConfig =
            toml::from_str(InitArgs::default_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.service.base_url, "http://127.0.0.1:14200");
    }
}
