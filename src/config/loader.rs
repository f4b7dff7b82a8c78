//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AnonymizeConfig;
use crate::domain::errors::AnonymizeError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`AnonymizeConfig`]
/// 4. Applies environment variable overrides (`ANONYMIZE_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use anonymize::config::loader::load_config;
///
/// let config = load_config("anonymize.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AnonymizeConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AnonymizeError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AnonymizeError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: AnonymizeConfig = toml::from_str(&contents)
        .map_err(|e| AnonymizeError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        AnonymizeError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are passed through untouched. Referencing an unset
/// variable is an error, reported with all missing names at once.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid substitution pattern");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AnonymizeError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `ANONYMIZE_*` prefix
///
/// Variables follow the pattern `ANONYMIZE_<SECTION>_<KEY>`, for example
/// `ANONYMIZE_SERVICE_BASE_URL` or `ANONYMIZE_DETECTION_SCORE_THRESHOLD`.
/// Unparseable numeric values leave the file value in place.
fn apply_env_overrides(config: &mut AnonymizeConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("ANONYMIZE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Service overrides
    if let Ok(val) = std::env::var("ANONYMIZE_SERVICE_BASE_URL") {
        config.service.base_url = val;
    }
    if let Ok(val) = std::env::var("ANONYMIZE_SERVICE_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.service.timeout_seconds = timeout;
        }
    }

    // Detection overrides
    if let Ok(val) = std::env::var("ANONYMIZE_DETECTION_ENABLED_ENTITIES") {
        config.detection.enabled_entities = val
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
    if let Ok(val) = std::env::var("ANONYMIZE_DETECTION_SCORE_THRESHOLD") {
        if let Ok(threshold) = val.parse() {
            config.detection.score_threshold = threshold;
        }
    }
    if let Ok(val) = std::env::var("ANONYMIZE_DETECTION_STYLE") {
        if let Ok(style) = val.parse() {
            config.detection.style = style;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("ANONYMIZE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("ANONYMIZE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
