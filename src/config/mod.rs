//! Configuration management.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Configuration comes from `anonymize.toml` with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `ANONYMIZE_*` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! The detection profile ([`DetectionConfig`]) is loaded once with the rest
//! of the configuration and passed explicitly wherever it is needed; there
//! is no ambient global configuration state.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "anonymize"
//! log_level = "info"
//!
//! [service]
//! base_url = "http://127.0.0.1:14200"
//! timeout_seconds = 30
//!
//! [detection]
//! enabled_entities = ["PERSON", "LOCATION", "CH_AHV", "CH_IBAN"]
//! score_threshold = 0.5
//! style = "replace"
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    AnonymizeConfig, ApplicationConfig, DetectionConfig, LoggingConfig, ServiceConfig,
};
