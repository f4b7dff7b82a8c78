//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Anonymize - Swiss PII review and anonymization
#[derive(Parser, Debug)]
#[command(name = "anonymize")]
#[command(version, about, long_about = None)]
#[command(author = "Anonymize Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "anonymize.toml", env = "ANONYMIZE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ANONYMIZE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymize a text file through the analysis service
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// List entity types supported by the analysis service
    Entities(commands::entities::EntitiesArgs),

    /// Show analysis-service health
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
