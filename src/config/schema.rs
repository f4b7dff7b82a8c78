//! Configuration schema types
//!
//! Defines the configuration structure mapped from `anonymize.toml`. The
//! detection profile is an explicitly constructed, explicitly passed
//! object: it is loaded once with the rest of the configuration and handed
//! to the service client per call, never read from ambient global state.

use crate::domain::AnonymizationStyle;
use serde::{Deserialize, Serialize};

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizeConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Analysis-service connection settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Detection profile (entity visibility, threshold, style)
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AnonymizeConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.service.validate()?;
        self.detection.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Default for AnonymizeConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig::default(),
            service: ServiceConfig::default(),
            detection: DetectionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// Analysis-service connection configuration
///
/// The service is a local sidecar; there is no authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the local analysis service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("service.base_url cannot be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("service.base_url must start with http:// or https://".to_string());
        }
        if url::Url::parse(&self.base_url).is_err() {
            return Err(format!("service.base_url is not a valid URL: {}", self.base_url));
        }
        if self.timeout_seconds == 0 {
            return Err("service.timeout_seconds must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Detection profile
///
/// Which entity types the service should detect, the minimum confidence,
/// and the default rendering style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Entity types to detect
    #[serde(default = "default_enabled_entities")]
    pub enabled_entities: Vec<String>,

    /// Minimum confidence score for detections, in [0.0, 1.0]
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f32,

    /// Default anonymization style
    #[serde(default)]
    pub style: AnonymizationStyle,
}

impl DetectionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled_entities.is_empty() {
            return Err("detection.enabled_entities cannot be empty".to_string());
        }
        if self.enabled_entities.iter().any(|e| e.trim().is_empty()) {
            return Err("detection.enabled_entities cannot contain blank entries".to_string());
        }
        if !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(format!(
                "detection.score_threshold must be between 0.0 and 1.0, got {}",
                self.score_threshold
            ));
        }
        Ok(())
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            enabled_entities: default_enabled_entities(),
            score_threshold: default_score_threshold(),
            style: AnonymizationStyle::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable rolling-file logging in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

fn default_app_name() -> String {
    "anonymize".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    // Port the bundled sidecar listens on
    "http://127.0.0.1:14200".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_enabled_entities() -> Vec<String> {
    [
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
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_score_threshold() -> f32 {
    0.5
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}
